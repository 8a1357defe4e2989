use std::fmt;

use crate::models::client::{Message, MessageRole};

/// Reply the model is told to give when there's nothing worth summarizing.
pub const NOTHING_TO_SUMMARIZE: &str = "⚠️ No significant content to summarize.";

pub trait SystemPrompt: fmt::Display {
    fn to_messages(&self, user_content: String) -> Vec<Message> {
        vec![
            Message {
                role: MessageRole::System,
                content: self.to_string(),
            },
            Message {
                role: MessageRole::User,
                content: user_content,
            },
        ]
    }
}

impl<T: fmt::Display> SystemPrompt for T {}

pub struct SummaryPrompt {}

impl fmt::Display for SummaryPrompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You are a summarization engine.
- Summarize **factual and descriptive content** from the input.
- If the input contains **time-based events**, meetings, or reminders, include them as concise bullet points.
- Ignore greetings, questions, or conversational elements.
- If there's no **substantial content** to summarize, respond with:
  \"{NOTHING_TO_SUMMARIZE}\"
- Your output should have **3–5 bullet points** maximum.
- Each bullet point should be **short and concise** (max 2 lines). Avoid unnecessary elaboration or filler.
- Do not answer questions or engage in conversation, focus only on summarizing the content."
        )
    }
}

/// Wraps the text to summarize in the user turn of the conversation.
pub struct SummaryInstruction<'a> {
    pub text: &'a str,
}

impl fmt::Display for SummaryInstruction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Summarize the following content based solely on factual or descriptive information. If the input does not provide such content, return a warning:\n\n{}",
            self.text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_messages() {
        let instruction = SummaryInstruction {
            text: "Dentist at 3pm on Friday",
        };
        let messages = SummaryPrompt {}.to_messages(instruction.to_string());
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, MessageRole::System);
        assert!(messages[0].content.contains(NOTHING_TO_SUMMARIZE));
        assert!(messages[0].content.contains("3–5 bullet points"));
        assert_eq!(messages[1].role, MessageRole::User);
        assert!(messages[1].content.ends_with("\n\nDentist at 3pm on Friday"));
    }
}

use jot::NEW_NOTE_ID;
use jot_client::{
    api::ApiClient,
    editor::{Notice, NoticeLevel, NoteEditor},
    errors::ClientError,
    store::NotesStore,
};
use pico_args::Arguments;
use rustyline::DefaultEditor;

const HELP: &str = "\
Keep notes and summarize them

USAGE:
  jot_client [OPTIONS] <COMMAND> [ID]

COMMANDS:
  list        List your notes
  show ID     Show a note
  new         Create a note           (requires --title)
  edit ID     Change a note's title or content
  delete ID   Permanently delete a note
  summarize ID
              Summarize a note's content and store the summary on it

OPTIONS:
  --url       Server URL                     [default: http://127.0.0.1:6969]
  --token     Bearer token                   [default: $JOT_TOKEN]
  --title     Note title for new and edit
  --content   Note content for new and edit
  --search    Only list notes containing this text

FLAGS:
  --yes         Delete without asking for confirmation
  -h, --help    Print help information
";

struct Args {
    url: String,
    token: String,
    title: Option<String>,
    content: Option<String>,
    search: Option<String>,
    yes: bool,
    command: String,
    id: Option<String>,
}

fn parse_args() -> Result<Args, Box<dyn std::error::Error>> {
    let mut pargs = Arguments::from_env();

    if pargs.contains(["-h", "--help"]) {
        println!("{}", HELP);
        std::process::exit(0);
    }

    let url = pargs
        .opt_value_from_str("--url")?
        .unwrap_or("http://127.0.0.1:6969".into());
    let token = match pargs.opt_value_from_str("--token")? {
        Some(token) => token,
        None => dotenvy::var("JOT_TOKEN")?,
    };
    Ok(Args {
        url,
        token,
        title: pargs.opt_value_from_str("--title")?,
        content: pargs.opt_value_from_str("--content")?,
        search: pargs.opt_value_from_str("--search")?,
        yes: pargs.contains("--yes"),
        command: pargs.free_from_str()?,
        id: pargs.opt_free_from_str()?,
    })
}

fn print_notices(notices: Vec<Notice>) {
    for notice in notices {
        match notice.level {
            NoticeLevel::Info => println!("{}: {}", notice.title, notice.description),
            NoticeLevel::Error => eprintln!("{}: {}", notice.title, notice.description),
        }
    }
}

fn confirm_delete() -> bool {
    let Ok(mut rl) = DefaultEditor::new() else {
        return false;
    };
    match rl.readline("This action cannot be undone. Delete this note? [y/N] ") {
        Ok(answer) => matches!(answer.trim(), "y" | "Y" | "yes"),
        Err(_) => false,
    }
}

fn print_note(editor: &NoteEditor) {
    println!("# {}", editor.title());
    if !editor.content().is_empty() {
        println!("\n{}", editor.content());
    }
    if let Some(summary) = editor.summary() {
        println!("\nSummary:\n{summary}");
    }
}

async fn run(args: Args) -> Result<(), ClientError> {
    let Args {
        url,
        token,
        title,
        content,
        search,
        yes,
        command,
        id,
    } = args;
    let mut store = NotesStore::new(ApiClient::new(&url, &token), &token);
    let id = id.ok_or(ClientError::Validation("A note ID is required"));

    match command.as_str() {
        "list" => {
            let notes = match search {
                Some(query) => store.search(&query).await?,
                None => store.list().await?,
            };
            for note in notes {
                println!(
                    "{}  {}  {}",
                    note.id,
                    note.updated_at.format("%Y-%m-%d %H:%M"),
                    note.title
                );
            }
        }
        "show" => {
            let editor = NoteEditor::open(store, &id?).await?;
            print_note(&editor);
        }
        "new" | "edit" => {
            let id = if command == "new" {
                NEW_NOTE_ID.to_string()
            } else {
                id?
            };
            let mut editor = NoteEditor::open(store, &id).await?;
            if let Some(title) = title {
                editor.set_title(title);
            }
            if let Some(content) = content {
                editor.set_content(content);
            }
            let result = editor.save().await;
            print_notices(editor.take_notices());
            println!("{}", result?);
        }
        "delete" => {
            let mut editor = NoteEditor::open(store, &id?).await?;
            let result = editor.delete(|| yes || confirm_delete()).await;
            print_notices(editor.take_notices());
            result?;
        }
        "summarize" => {
            let mut editor = NoteEditor::open(store, &id?).await?;
            // Dropping the request on Ctrl-C cancels it.
            let result = tokio::select! {
                result = editor.summarize() => Some(result),
                _ = tokio::signal::ctrl_c() => None,
            };
            print_notices(editor.take_notices());
            match result {
                Some(result) => println!("{}", result?.summary),
                None => eprintln!("^C"),
            }
        }
        _ => return Err(ClientError::Validation("Unknown command, see --help")),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args()?;
    if let Err(err) = run(args).await {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
    Ok(())
}

use diesel_async::{AsyncPgConnection, pooled_connection::AsyncDieselConnectionManager};
use serde::{Deserialize, Deserializer, de};
use std::collections::HashMap;

pub type Pool = bb8::Pool<AsyncDieselConnectionManager<AsyncPgConnection>>;

pub fn default_server_binding_addr() -> String {
    "127.0.0.1:6969".to_string()
}

pub fn default_summarization_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

pub fn default_summarization_model() -> String {
    "llama-3.1-8b-instant".to_string()
}

pub fn default_timeout_secs() -> u64 {
    30
}

/// Expand `${VAR}` references to environment variables within a config
/// string so secrets don't have to live in the config file.
pub fn expand_env(value: &str) -> Result<String, envsubst::Error> {
    if !envsubst::is_templated(value) {
        return Ok(value.to_string());
    }
    // envsubst rejects variables containing template characters.
    let variables: HashMap<String, String> = std::env::vars()
        .filter(|(key, value)| !is_template_like(key) && !is_template_like(value))
        .collect();
    envsubst::substitute(value, &variables)
}

fn is_template_like(s: &str) -> bool {
    s.contains(['$', '{', '}'])
}

pub fn deserialize_with_envsubst<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    let value = String::deserialize(deserializer)?;
    expand_env(&value).map(T::from).map_err(de::Error::custom)
}

pub fn deserialize_option_with_envsubst<'de, D>(
    deserializer: D,
) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)?
        .map(|value| expand_env(&value).map_err(de::Error::custom))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untemplated_values_pass_through() {
        assert_eq!(expand_env("plain-key").unwrap(), "plain-key");
    }

    #[test]
    fn templated_values_expand() {
        // PATH is always set in test environments.
        let path = std::env::var("PATH").unwrap();
        assert_eq!(expand_env("${PATH}").unwrap(), path);
    }
}

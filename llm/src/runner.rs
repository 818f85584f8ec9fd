use crate::client::OllamaClient;
use crate::traits::LLMError;

/// Create an [`OllamaClient`] using the `OLLAMA_URL` and `OLLAMA_MODEL`
/// environment variables.
pub fn client_from_env() -> Result<OllamaClient, LLMError> {
    let url = std::env::var("OLLAMA_URL").unwrap_or_else(|_| "http://localhost:11434".into());
    OllamaClient::new(&url, model_from_env())
}

/// Read the chat model name from the `OLLAMA_MODEL` environment variable.
pub fn model_from_env() -> String {
    std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3.2".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_env_configuration() {
        std::env::set_var("OLLAMA_URL", "http://127.0.0.1:11434");
        std::env::set_var("OLLAMA_MODEL", "tiny");
        let client = client_from_env().unwrap();
        assert_eq!(client.model(), "tiny");
    }
}

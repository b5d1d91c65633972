//! Page routes for the documentation site.
//!
//! Every page the site serves has one [`Route`] binding its symbolic name
//! to a fixed URL path. The set is closed: adding a page means adding a
//! variant, and link targets elsewhere in the crate reference variants,
//! never raw strings.

use std::fmt;

use serde::{Serialize, Serializer};

/// Documentation page routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Quickstart,
    Components,
    Build,
    PreviewChanges,
    FeatureFlag,
    AiGateway,
    PromptManagement,
    Telemetry,
    Experiments,
    ClientSdk,
    Deployment,
    Langchain,
    LlamaIndex,
    LlmProviders,
    VectorDb,
    ChatbotWithMemory,
    RagApplication,
    AiTextEditor,
    ClassifyNewsArticles,
    DocumentQa,
    TextToSql,
    UnstructuredToJson,
    ImprovingRagPerformance,
    CompareMultipleModels,
}

impl Route {
    /// All routes in declaration order.
    pub const ALL: [Self; 24] = [
        Self::Quickstart,
        Self::Components,
        Self::Build,
        Self::PreviewChanges,
        Self::FeatureFlag,
        Self::AiGateway,
        Self::PromptManagement,
        Self::Telemetry,
        Self::Experiments,
        Self::ClientSdk,
        Self::Deployment,
        Self::Langchain,
        Self::LlamaIndex,
        Self::LlmProviders,
        Self::VectorDb,
        Self::ChatbotWithMemory,
        Self::RagApplication,
        Self::AiTextEditor,
        Self::ClassifyNewsArticles,
        Self::DocumentQa,
        Self::TextToSql,
        Self::UnstructuredToJson,
        Self::ImprovingRagPerformance,
        Self::CompareMultipleModels,
    ];

    /// URL path this route is bound to.
    ///
    /// Paths are absolute (leading `/`), lowercase, with underscores
    /// separating words within a segment.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Quickstart => "/",
            Self::Components => "/components",
            Self::Build => "/guides/build",
            Self::PreviewChanges => "/guides/preview_changes",
            Self::FeatureFlag => "/guides/feature_flag",
            Self::AiGateway => "/guides/ai_gateway",
            Self::PromptManagement => "/guides/prompt_management",
            Self::Telemetry => "/guides/telemetry",
            Self::Experiments => "/guides/experiments",
            Self::ClientSdk => "/guides/client_sdk",
            Self::Deployment => "/guides/deployment",
            Self::Langchain => "/integrations/langchain",
            Self::LlamaIndex => "/integrations/llamaindex",
            Self::LlmProviders => "/integrations/llm_providers",
            Self::VectorDb => "/integrations/vector_db",
            Self::ChatbotWithMemory => "/cookbooks/building_a_chatbot_with_memory",
            Self::RagApplication => "/cookbooks/building_a_rag_application",
            Self::AiTextEditor => "/cookbooks/building_ai_text_editor",
            Self::ClassifyNewsArticles => "/cookbooks/classify_news_articles",
            Self::DocumentQa => "/cookbooks/document_qa",
            Self::TextToSql => "/cookbooks/text_to_sql",
            Self::UnstructuredToJson => "/cookbooks/unstructured_to_json",
            Self::ImprovingRagPerformance => "/cookbooks/improving_rag_performance",
            Self::CompareMultipleModels => "/cookbooks/compare_multiple_models",
        }
    }

    /// Parse a route from its URL path.
    ///
    /// Returns `None` if the path is not bound to any route. Paths must
    /// match exactly; there is no trailing-slash normalization here.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Self::Quickstart),
            "/components" => Some(Self::Components),
            "/guides/build" => Some(Self::Build),
            "/guides/preview_changes" => Some(Self::PreviewChanges),
            "/guides/feature_flag" => Some(Self::FeatureFlag),
            "/guides/ai_gateway" => Some(Self::AiGateway),
            "/guides/prompt_management" => Some(Self::PromptManagement),
            "/guides/telemetry" => Some(Self::Telemetry),
            "/guides/experiments" => Some(Self::Experiments),
            "/guides/client_sdk" => Some(Self::ClientSdk),
            "/guides/deployment" => Some(Self::Deployment),
            "/integrations/langchain" => Some(Self::Langchain),
            "/integrations/llamaindex" => Some(Self::LlamaIndex),
            "/integrations/llm_providers" => Some(Self::LlmProviders),
            "/integrations/vector_db" => Some(Self::VectorDb),
            "/cookbooks/building_a_chatbot_with_memory" => Some(Self::ChatbotWithMemory),
            "/cookbooks/building_a_rag_application" => Some(Self::RagApplication),
            "/cookbooks/building_ai_text_editor" => Some(Self::AiTextEditor),
            "/cookbooks/classify_news_articles" => Some(Self::ClassifyNewsArticles),
            "/cookbooks/document_qa" => Some(Self::DocumentQa),
            "/cookbooks/text_to_sql" => Some(Self::TextToSql),
            "/cookbooks/unstructured_to_json" => Some(Self::UnstructuredToJson),
            "/cookbooks/improving_rag_performance" => Some(Self::ImprovingRagPerformance),
            "/cookbooks/compare_multiple_models" => Some(Self::CompareMultipleModels),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl Serialize for Route {
    /// Routes serialize as their path string (the `href` consumers read).
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_quickstart_is_site_root() {
        assert_eq!(Route::Quickstart.path(), "/");
    }

    #[test]
    fn test_path_values() {
        assert_eq!(Route::Components.path(), "/components");
        assert_eq!(Route::AiGateway.path(), "/guides/ai_gateway");
        assert_eq!(Route::VectorDb.path(), "/integrations/vector_db");
        assert_eq!(
            Route::ChatbotWithMemory.path(),
            "/cookbooks/building_a_chatbot_with_memory"
        );
    }

    #[test]
    fn test_paths_are_unique() {
        let paths: HashSet<&str> = Route::ALL.iter().map(|route| route.path()).collect();

        assert_eq!(paths.len(), Route::ALL.len());
    }

    #[test]
    fn test_paths_are_absolute_without_whitespace() {
        for route in Route::ALL {
            let path = route.path();
            assert!(path.starts_with('/'), "{route:?}: {path} not slash-prefixed");
            assert!(
                !path.contains(char::is_whitespace),
                "{route:?}: {path} contains whitespace"
            );
        }
    }

    #[test]
    fn test_parse_round_trips_every_route() {
        for route in Route::ALL {
            assert_eq!(Route::parse(route.path()), Some(route));
        }
    }

    #[test]
    fn test_parse_unknown_path_returns_none() {
        assert_eq!(Route::parse("/nonexistent"), None);
        assert_eq!(Route::parse(""), None);
        // No normalization: paths must match exactly
        assert_eq!(Route::parse("guides/build"), None);
        assert_eq!(Route::parse("/guides/build/"), None);
    }

    #[test]
    fn test_display_writes_path() {
        assert_eq!(Route::Quickstart.to_string(), "/");
        assert_eq!(format!("{}", Route::TextToSql), "/cookbooks/text_to_sql");
    }

    #[test]
    fn test_serializes_as_path_string() {
        let json = serde_json::to_value(Route::PromptManagement).unwrap();

        assert_eq!(json, "/guides/prompt_management");
    }
}

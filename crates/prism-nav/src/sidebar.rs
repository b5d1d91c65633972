//! Sidebar navigation table.
//!
//! The authored, display-ready grouping of documentation pages. Group
//! order and link order within each group control on-page presentation
//! order and must be preserved by consumers.
//!
//! The table is a plain constant. The rendering layer iterates it as-is;
//! there is no filtering or transformation on this side.

use serde::Serialize;

use crate::route::Route;

/// A single sidebar link: display title plus target route.
///
/// The target is a [`Route`] value, so a link can never point at an
/// undefined page. Serializes as `{ "title": ..., "href": "/..." }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Display title.
    pub title: &'static str,
    /// Link target route.
    #[serde(rename = "href")]
    pub route: Route,
}

/// A titled, ordered group of sidebar links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavGroup {
    /// Group heading shown above the links.
    pub title: &'static str,
    /// Links in display order.
    pub links: &'static [Link],
}

/// The complete sidebar, groups in display order.
pub const SIDEBAR: &[NavGroup] = &[
    NavGroup {
        title: "Getting Started",
        links: &[
            Link {
                title: "Quickstart",
                route: Route::Quickstart,
            },
            Link {
                title: "Components",
                route: Route::Components,
            },
        ],
    },
    NavGroup {
        title: "Guides",
        links: &[
            Link {
                title: "Build Your Application",
                route: Route::Build,
            },
            Link {
                title: "Preview Changes",
                route: Route::PreviewChanges,
            },
            Link {
                title: "Hot-swap Components",
                route: Route::FeatureFlag,
            },
            Link {
                title: "AI Gateway",
                route: Route::AiGateway,
            },
            Link {
                title: "Prompt Management",
                route: Route::PromptManagement,
            },
            Link {
                title: "Logging And Tracing",
                route: Route::Telemetry,
            },
            Link {
                title: "Experiments",
                route: Route::Experiments,
            },
            Link {
                title: "Client SDK",
                route: Route::ClientSdk,
            },
            Link {
                title: "Deployment",
                route: Route::Deployment,
            },
        ],
    },
    NavGroup {
        title: "Integrations",
        links: &[
            Link {
                title: "LangChain",
                route: Route::Langchain,
            },
            Link {
                title: "LlamaIndex",
                route: Route::LlamaIndex,
            },
            Link {
                title: "Model Providers",
                route: Route::LlmProviders,
            },
            Link {
                title: "Vector Databases",
                route: Route::VectorDb,
            },
        ],
    },
    NavGroup {
        title: "Cookbook",
        links: &[
            Link {
                title: "Chatbot with Memory",
                route: Route::ChatbotWithMemory,
            },
            Link {
                title: "RAG Application",
                route: Route::RagApplication,
            },
            Link {
                title: "AI Text Editor",
                route: Route::AiTextEditor,
            },
            Link {
                title: "Classify News Articles",
                route: Route::ClassifyNewsArticles,
            },
            Link {
                title: "Q&A Over Documents",
                route: Route::DocumentQa,
            },
            Link {
                title: "Text to SQL",
                route: Route::TextToSql,
            },
            Link {
                title: "Unstructured Data to JSON",
                route: Route::UnstructuredToJson,
            },
            Link {
                title: "Improving RAG Performance",
                route: Route::ImprovingRagPerformance,
            },
            Link {
                title: "Compare Different Models",
                route: Route::CompareMultipleModels,
            },
        ],
    },
];

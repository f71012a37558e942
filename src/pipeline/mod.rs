//! Brief assembly pipeline
//!
//! A fixed, ordered list of named stages. Each stage builds one prompt from
//! the form inputs, the document digest, and everything earlier stages
//! produced, then makes one text-generation call. Stages run strictly
//! sequentially because later prompts embed earlier output. Any stage
//! failure aborts the run with an error naming the stage; no partial brief
//! survives.

pub mod digester;
pub mod practice;

use crate::domain::models::MeetingRequest;
use crate::domain::prompts::{PromptTemplates, StageInputs};
use crate::error::{AppError, Result};
use crate::ports::llm::{GenerationConfig, TextGenerationPort};
use crate::ports::search::{self, WebSearchPort};
use std::sync::Arc;

/// Results pulled from the live web search, capped to keep prompts small
const SEARCH_RESULT_LIMIT: usize = 5;

/// One pipeline stage: a stable key, the Markdown heading it contributes,
/// and its prompt builder.
struct Stage {
    name: &'static str,
    heading: &'static str,
    build: fn(&StageInputs) -> String,
}

/// The fixed stage order. Do not reorder: later prompts assume earlier
/// sections exist.
const STAGES: [Stage; 6] = [
    Stage {
        name: "context analysis",
        heading: "Meeting Context Analysis",
        build: PromptTemplates::context_analysis,
    },
    Stage {
        name: "industry analysis",
        heading: "Industry Analysis",
        build: PromptTemplates::industry_analysis,
    },
    Stage {
        name: "meeting strategy",
        heading: "Meeting Strategy & Agenda",
        build: PromptTemplates::meeting_strategy,
    },
    Stage {
        name: "executive brief",
        heading: "Executive Brief",
        build: PromptTemplates::executive_brief,
    },
    Stage {
        name: "rehearsal simulation",
        heading: "Rehearsal Simulation",
        build: PromptTemplates::rehearsal_simulation,
    },
    Stage {
        name: "post-meeting activation",
        heading: "Post-Meeting Activation",
        build: PromptTemplates::post_meeting_activation,
    },
];

/// Stage headings in pipeline order, for callers that present structure
pub fn stage_headings() -> Vec<&'static str> {
    STAGES.iter().map(|s| s.heading).collect()
}

/// Sequential brief-assembly pipeline over the generation and search ports
pub struct BriefPipeline {
    llm: Arc<dyn TextGenerationPort>,
    search: Arc<dyn WebSearchPort>,
    config: GenerationConfig,
}

impl BriefPipeline {
    pub fn new(
        llm: Arc<dyn TextGenerationPort>,
        search: Arc<dyn WebSearchPort>,
        config: GenerationConfig,
    ) -> Self {
        Self {
            llm,
            search,
            config,
        }
    }

    /// Run all stages in order and assemble the final Markdown brief.
    ///
    /// The returned document has one `##` section per stage, in stage order.
    pub async fn run(&self, request: &MeetingRequest, digest: &str) -> Result<String> {
        let search_notes = self.gather_search_notes(request).await?;

        let mut sections: Vec<String> = Vec::with_capacity(STAGES.len());
        let mut prior = String::new();

        for stage in &STAGES {
            let inputs = StageInputs {
                request,
                digest,
                search_notes: &search_notes,
                prior: &prior,
            };
            let prompt = (stage.build)(&inputs);

            log::info!("Running pipeline stage: {}", stage.name);
            let text = self
                .llm
                .generate(&prompt, &self.config)
                .await
                .map_err(|e| AppError::at_stage(stage.name, e))?;

            let section = format!("## {}\n\n{}", stage.heading, text.trim());
            prior.push_str(&section);
            prior.push_str("\n\n");
            sections.push(section);
        }

        Ok(sections.join("\n\n"))
    }

    /// One search per run, feeding the early analysis stages. A failure here
    /// is attributed to the context-analysis stage, which consumes it first.
    async fn gather_search_notes(&self, request: &MeetingRequest) -> Result<String> {
        if !request.include_live_updates || !self.search.is_configured() {
            return Ok(String::new());
        }

        let query = format!("{} {}", request.company, request.objective);
        let results = self
            .search
            .search(&query, SEARCH_RESULT_LIMIT)
            .await
            .map_err(|e| AppError::at_stage(STAGES[0].name, e))?;

        log::info!("Live search returned {} results", results.len());
        Ok(search::format_results(&results))
    }
}

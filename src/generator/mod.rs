//! Keyword-driven RAG configuration generator.
//!
//! One pass over the lowercased project name and description picks
//! specialist archetypes, knowledge sources and an interaction pattern from
//! the tables in [`archetypes`]. Everything here is pure and deterministic.

pub mod archetypes;
pub mod templates;

use std::fmt::Write;
use crate::models::{
    Agent, ErrorHandling, InteractionFlow, InteractionPattern, KnowledgeBase,
    ProjectRequirements, RagAgentConfiguration, TaskDistribution,
};
use archetypes::{
    Archetype, COORDINATOR, DEFAULT_SOURCE, GENERAL, ORCHESTRATION_KEYWORDS, ORCHESTRATOR,
    SOURCES, SPECIALISTS, SYNTHESIS,
};

/// A specialist archetype together with the keywords that selected it.
#[derive(Debug)]
pub struct SpecialistMatch {
    pub archetype: &'static Archetype,
    pub keywords: Vec<&'static str>,
}

/// Everything the generator learned from the text.
#[derive(Debug)]
pub struct Analysis {
    pub specialists: Vec<SpecialistMatch>,
    pub sources: Vec<&'static str>,
    pub orchestration: Vec<&'static str>,
    pub pattern: InteractionPattern,
}

impl Analysis {
    /// Archetypes in the order they appear in the configuration.
    pub fn archetypes(&self) -> Vec<&'static Archetype> {
        let mut selected = Vec::with_capacity(self.specialists.len() + 2);

        match self.pattern {
            InteractionPattern::Orchestrated => selected.push(&ORCHESTRATOR),
            InteractionPattern::Hierarchical => selected.push(&COORDINATOR),
            InteractionPattern::Single | InteractionPattern::Sequential => {}
        }

        if self.specialists.is_empty() {
            selected.push(&GENERAL);
        } else {
            selected.extend(self.specialists.iter().map(|m| m.archetype));
        }

        if self.specialists.len() > 1 {
            selected.push(&SYNTHESIS);
        }
        selected
    }
}

pub fn analyze(requirements: &ProjectRequirements) -> Analysis {
    let text = format!(
        "{}\n{}",
        requirements.project_name, requirements.project_description
    )
    .to_lowercase();

    let specialists: Vec<SpecialistMatch> = SPECIALISTS
        .iter()
        .filter_map(|archetype| {
            let keywords = matched_keywords(&text, archetype.keywords);
            (!keywords.is_empty()).then_some(SpecialistMatch { archetype, keywords })
        })
        .collect();

    let sources = SOURCES
        .iter()
        .filter(|rule| !matched_keywords(&text, rule.keywords).is_empty())
        .map(|rule| rule.label)
        .collect();

    let orchestration = matched_keywords(&text, ORCHESTRATION_KEYWORDS);
    let pattern = choose_pattern(specialists.len(), !orchestration.is_empty());

    tracing::debug!(
        "Matched {} specialists, pattern {}",
        specialists.len(),
        pattern
    );

    Analysis {
        specialists,
        sources,
        orchestration,
        pattern,
    }
}

fn choose_pattern(specialist_count: usize, wants_orchestration: bool) -> InteractionPattern {
    match specialist_count {
        0 | 1 => InteractionPattern::Single,
        _ if wants_orchestration => InteractionPattern::Orchestrated,
        2 => InteractionPattern::Sequential,
        _ => InteractionPattern::Hierarchical,
    }
}

/// Keywords that occur in `text` at the start of a word. Stems such as
/// "analy" therefore match "analysis" but "api" does not match "rapid".
pub fn matched_keywords(text: &str, keywords: &[&'static str]) -> Vec<&'static str> {
    keywords
        .iter()
        .copied()
        .filter(|keyword| contains_stem(text, keyword))
        .collect()
}

fn contains_stem(text: &str, stem: &str) -> bool {
    text.match_indices(stem).any(|(idx, _)| {
        text[..idx]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric())
    })
}

pub fn generate_configuration(requirements: &ProjectRequirements) -> RagAgentConfiguration {
    let analysis = analyze(requirements);
    build_configuration(requirements, &analysis)
}

pub fn build_configuration(
    requirements: &ProjectRequirements,
    analysis: &Analysis,
) -> RagAgentConfiguration {
    let sources: Vec<String> = if analysis.sources.is_empty() {
        vec![DEFAULT_SOURCE.to_string()]
    } else {
        analysis.sources.iter().map(|s| s.to_string()).collect()
    };

    let agents: Vec<Agent> = analysis
        .archetypes()
        .into_iter()
        .map(|archetype| build_agent(archetype, &sources, &requirements.project_name))
        .collect();

    let interaction_flow = interaction_flow(analysis.pattern, &agents);

    RagAgentConfiguration {
        agents,
        interaction_flow,
    }
}

fn build_agent(archetype: &Archetype, sources: &[String], project_name: &str) -> Agent {
    let mut agent = Agent {
        kind: archetype.kind.to_string(),
        role: archetype.role.to_string(),
        responsibilities: archetype.responsibilities.iter().map(|r| r.to_string()).collect(),
        knowledge_base: KnowledgeBase {
            sources: if archetype.uses_sources { sources.to_vec() } else { Vec::new() },
            indexing_strategy: archetype.indexing_strategy.to_string(),
            retrieval_method: archetype.retrieval_method.to_string(),
        },
        prompt_template: String::new(),
        tooling: archetype.tooling.iter().map(|t| t.to_string()).collect(),
    };
    agent.prompt_template = templates::render_prompt(archetype.template, project_name, &agent);
    agent
}

fn interaction_flow(pattern: InteractionPattern, agents: &[Agent]) -> InteractionFlow {
    let kinds: Vec<&str> = agents.iter().map(|a| a.kind.as_str()).collect();
    // Specialists sit between the optional leading router and trailing synthesis
    let specialists = kinds
        .iter()
        .filter(|k| !matches!(**k, "coordinator" | "orchestrator" | "synthesis"))
        .copied()
        .collect::<Vec<_>>()
        .join(", ");

    let (task_distribution, error_handling) = match pattern {
        InteractionPattern::Single => (
            TaskDistribution {
                strategy: "direct".into(),
                routing: format!("All queries are handled by the {} agent", specialists),
            },
            ErrorHandling {
                strategy: "retry".into(),
                fallback_behavior: "Answer from model knowledge and flag missing sources".into(),
            },
        ),
        InteractionPattern::Sequential => (
            TaskDistribution {
                strategy: "pipeline".into(),
                routing: kinds.join(" -> "),
            },
            ErrorHandling {
                strategy: "retry-then-skip".into(),
                fallback_behavior: "Pass the previous stage output forward unchanged".into(),
            },
        ),
        InteractionPattern::Hierarchical => (
            TaskDistribution {
                strategy: "delegation".into(),
                routing: format!(
                    "coordinator delegates to {}; results merged by synthesis",
                    specialists
                ),
            },
            ErrorHandling {
                strategy: "escalate".into(),
                fallback_behavior: "Coordinator reassigns the subtask or answers with partial results".into(),
            },
        ),
        InteractionPattern::Orchestrated => (
            TaskDistribution {
                strategy: "parallel".into(),
                routing: format!(
                    "orchestrator dispatches to {} concurrently; results merged by synthesis",
                    specialists
                ),
            },
            ErrorHandling {
                strategy: "circuit-breaker".into(),
                fallback_behavior: "Merge results from agents that succeeded and report the rest".into(),
            },
        ),
    };

    InteractionFlow {
        pattern,
        task_distribution,
        error_handling,
    }
}

/// Explains, in plain text, why the generator picks what it picks.
pub fn rationale(requirements: &ProjectRequirements) -> String {
    let analysis = analyze(requirements);
    let specialist_count = analysis.specialists.len();
    let mut text = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(text, "Configuration rationale for \"{}\"", requirements.project_name);
    let _ = writeln!(text);
    let _ = writeln!(text, "Agents:");

    for archetype in analysis.archetypes() {
        let reason = match archetype.kind {
            "coordinator" => format!("delegates work across {} specialists", specialist_count),
            "orchestrator" => format!(
                "runs {} specialists in parallel (matched {})",
                specialist_count,
                quoted(&analysis.orchestration)
            ),
            "synthesis" => format!("merges the outputs of {} specialists", specialist_count),
            "general" => "no specialist keywords found, using a general-purpose assistant".to_string(),
            _ => {
                let keywords = analysis
                    .specialists
                    .iter()
                    .find(|m| m.archetype.kind == archetype.kind)
                    .map(|m| quoted(&m.keywords))
                    .unwrap_or_default();
                format!("matched {}", keywords)
            }
        };
        let _ = writeln!(text, "- {} ({}): {}", archetype.kind, archetype.role, reason);
    }

    let _ = writeln!(text);
    if analysis.sources.is_empty() {
        let _ = writeln!(
            text,
            "Knowledge sources: none detected, defaulting to {}",
            DEFAULT_SOURCE.to_lowercase()
        );
    } else {
        let _ = writeln!(text, "Knowledge sources: {}", analysis.sources.join(", "));
    }

    let why = match analysis.pattern {
        InteractionPattern::Single if specialist_count == 0 => {
            "a single general agent handles every query".to_string()
        }
        InteractionPattern::Single => "one specialist handles every query".to_string(),
        InteractionPattern::Sequential => "two specialists run one after the other".to_string(),
        InteractionPattern::Hierarchical => {
            format!("{} specialists need a coordinator", specialist_count)
        }
        InteractionPattern::Orchestrated => format!(
            "{} specialists and orchestration keywords ({})",
            specialist_count,
            quoted(&analysis.orchestration)
        ),
    };
    let _ = write!(text, "Interaction pattern: {} ({})", analysis.pattern, why);

    text
}

fn quoted(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| format!("\"{}\"", w))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requirements(description: &str) -> ProjectRequirements {
        ProjectRequirements {
            project_name: "Test project".to_string(),
            project_description: description.to_string(),
        }
    }

    fn kinds(config: &RagAgentConfiguration) -> Vec<&str> {
        config.agents.iter().map(|a| a.kind.as_str()).collect()
    }

    #[test]
    fn keywords_match_only_at_word_start() {
        let text = "rapid analysis of the github repositories";
        assert_eq!(matched_keywords(text, &["api", "analy", "repositor"]), vec!["analy", "repositor"]);
        assert!(contains_stem("api-first", "api"));
        assert!(!contains_stem("capital", "api"));
    }

    #[test]
    fn no_keywords_gives_single_general_agent() {
        let config = generate_configuration(&requirements(
            "We want something helpful for the marketing department to use daily at the office.",
        ));
        assert_eq!(kinds(&config), vec!["general"]);
        assert_eq!(config.interaction_flow.pattern, InteractionPattern::Single);
        assert_eq!(
            config.agents[0].knowledge_base.sources,
            vec![DEFAULT_SOURCE.to_string()]
        );
    }

    #[test]
    fn one_specialist_is_single() {
        let config = generate_configuration(&requirements(
            "A tool to summarize long meeting transcripts into a short digest for the team every week.",
        ));
        assert_eq!(kinds(&config), vec!["summarization"]);
        assert_eq!(config.interaction_flow.pattern, InteractionPattern::Single);
        assert_eq!(config.interaction_flow.task_distribution.strategy, "direct");
        assert_eq!(
            config.agents[0].knowledge_base.sources,
            vec!["Documents (PDF/Text)".to_string()]
        );
    }

    #[test]
    fn two_specialists_run_sequentially_with_synthesis() {
        let config = generate_configuration(&requirements(
            "Build a chatbot that answers customer questions about our product manuals in PDF form.",
        ));
        assert_eq!(kinds(&config), vec!["research", "conversation", "synthesis"]);
        assert_eq!(config.interaction_flow.pattern, InteractionPattern::Sequential);
        assert_eq!(
            config.interaction_flow.task_distribution.routing,
            "research -> conversation -> synthesis"
        );
        // Synthesis works on agent output, not on the knowledge sources
        assert!(config.agents[2].knowledge_base.sources.is_empty());
    }

    #[test]
    fn many_specialists_get_a_coordinator() {
        let config = generate_configuration(&requirements(
            "Research papers, analyze trends across them, summarize findings and explain code \
             snippets from the GitHub repositories.",
        ));
        assert_eq!(
            kinds(&config),
            vec!["coordinator", "research", "analysis", "summarization", "code", "synthesis"]
        );
        assert_eq!(config.interaction_flow.pattern, InteractionPattern::Hierarchical);
        assert_eq!(
            config.agents[1].knowledge_base.sources,
            vec!["Code Repositories".to_string()]
        );
    }

    #[test]
    fn orchestration_keywords_win_over_sequential() {
        let config = generate_configuration(&requirements(
            "A real-time pipeline that extracts entities from invoices and runs analytics on \
             spending metrics.",
        ));
        assert_eq!(
            kinds(&config),
            vec!["orchestrator", "extraction", "analysis", "synthesis"]
        );
        assert_eq!(config.interaction_flow.pattern, InteractionPattern::Orchestrated);
        assert_eq!(config.interaction_flow.error_handling.strategy, "circuit-breaker");
    }

    #[test]
    fn prompt_templates_are_rendered() {
        let config = generate_configuration(&requirements(
            "Build a chatbot that answers customer questions about our product manuals in PDF form.",
        ));
        let research = &config.agents[0].prompt_template;
        assert!(research.contains("Test project"));
        assert!(research.contains("Documents (PDF/Text)"));
        assert!(research.contains("Vector store: enabled"));
        assert!(!research.contains("{{"));
    }

    #[test]
    fn generation_is_deterministic() {
        let req = requirements("Search our wiki and summarize the answers for support staff.");
        assert_eq!(generate_configuration(&req), generate_configuration(&req));
    }

    #[test]
    fn rationale_names_keywords_and_pattern() {
        let text = rationale(&requirements(
            "A real-time pipeline that extracts entities from invoices and runs analytics on \
             spending metrics.",
        ));
        assert!(text.starts_with("Configuration rationale for \"Test project\""));
        assert!(text.contains("- extraction (Information Extraction): matched \"extract\", \"entit\", \"invoice\""));
        assert!(text.contains("none detected"));
        assert!(text.ends_with(
            "Interaction pattern: orchestrated (2 specialists and orchestration keywords (\"pipeline\", \"real-time\"))"
        ));
    }
}

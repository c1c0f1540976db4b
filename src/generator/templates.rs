use crate::models::Agent;

/// Fills a prompt template for one agent. `{{project_name}}`, `{{role}}`,
/// `{{sources}}` and `{{tools}}` are plain substitutions; `{{tool:NAME}}`
/// becomes "enabled" or "disabled" depending on the agent's tooling.
pub fn render_prompt(template: &str, project_name: &str, agent: &Agent) -> String {
    let sources = if agent.knowledge_base.sources.is_empty() {
        "upstream agent outputs".to_string()
    } else {
        agent.knowledge_base.sources.join(", ")
    };

    let text = template
        .replace("{{project_name}}", project_name)
        .replace("{{role}}", &agent.role)
        .replace("{{sources}}", &sources)
        .replace("{{tools}}", &agent.tooling.join(", "));

    render_tool_flags(&text, &agent.tooling)
}

fn render_tool_flags(text: &str, tooling: &[String]) -> String {
    const OPEN: &str = "{{tool:";

    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after = &rest[start + OPEN.len()..];

        let Some(end) = after.find("}}") else {
            // Unterminated placeholder, keep it verbatim
            out.push_str(&rest[start..]);
            return out;
        };

        let name = &after[..end];
        let enabled = tooling.iter().any(|t| t == name);
        out.push_str(if enabled { "enabled" } else { "disabled" });
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

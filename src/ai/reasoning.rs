use crate::project::ProjectDescriptor;

pub const ENHANCED_HEADING: &str = "# 🤖 AI-Enhanced Architectural Insights";

pub const ATTRIBUTION_NOTE: &str = "**Note:** The above insights were generated by Gemini 2.5 Flash to provide deeper architectural reasoning and implementation guidance for your project.";

const TEAM_FRAMEWORK_INSTRUCTION: &str = "Multi-Agent Framework: Please recommend a suitable multi-agent framework (e.g., Sequential, Parallel, A2A, ADK) and justify your choice based on the project requirements, explaining the pros and cons.\n\n";

const ENHANCEMENT_SECTIONS: &str = r#"Please enhance this prompt with the following well-structured sections. Use the project description as context to provide highly specific and relevant recommendations. Use clear markdown formatting with headers, bullet points, and numbered lists for maximum readability:

## 📋 Project Context
Provide a brief refined summary of what this project aims to achieve based on the description provided, highlighting the key value proposition and main use cases.

## 🏗️ Architecture Analysis
- **Why This Stack**: Explain the reasoning behind each tool recommendation
- **Architecture Pattern**: Recommend specific pattern (monolithic, microservices, serverless) with justification
- **Key Design Decisions**: List 3-5 critical architectural choices

## 🚀 Implementation Roadmap
Break down the implementation into logical phases with specific tasks and subtasks. DO NOT use weekly timelines. Instead, organize by functional milestones:

### Phase 1: Foundation & Setup
**Main Tasks:**
- [ ] Task 1: [Specific task]
  - [ ] Subtask 1.1: [Details]
  - [ ] Subtask 1.2: [Details]
- [ ] Task 2: [Specific task]
  - [ ] Subtask 2.1: [Details]
  - [ ] Subtask 2.2: [Details]

### Phase 2: Core Development
**Main Tasks:**
- [ ] Task 1: [Specific feature/component]
  - [ ] Subtask 1.1: [Implementation detail]
  - [ ] Subtask 1.2: [Testing approach]
- [ ] Task 2: [Integration work]
  - [ ] Subtask 2.1: [API setup]
  - [ ] Subtask 2.2: [Data flow]

### Phase 3: Polish & Launch
**Main Tasks:**
- [ ] Task 1: [Optimization task]
  - [ ] Subtask 1.1: [Performance tuning]
  - [ ] Subtask 1.2: [Security review]
- [ ] Task 2: [Deployment preparation]
  - [ ] Subtask 2.1: [Environment setup]
  - [ ] Subtask 2.2: [Launch checklist]

## ⚡ Technical Considerations

### Integration Strategy
- How the recommended tools work together
- Data flow between services
- API communication patterns

### Performance & Scalability
- Expected bottlenecks and solutions
- Caching strategies
- Database optimization tips

### Security Best Practices
- Authentication/authorization approach
- Data protection measures
- API security considerations

## 🎯 Success Metrics
- Key performance indicators
- Monitoring recommendations
- Quality benchmarks

## ⚠️ Known Problems & Exact Solutions
| Problem | Why It Happens | Fix It With |
|---------|----------------|-------------|
| [Specific challenge] | [Why it matters] | [How to address] |

## 💡 Pro Tips
- 3-5 expert recommendations specific to this project type
- Common pitfalls to avoid
- Time-saving shortcuts

Keep the tone professional but approachable. Use emojis sparingly for section headers only. Focus on actionable, practical advice.

IMPORTANT: 
- Use the project description to understand the specific context and goals
- Make all recommendations highly specific to this project, not generic
- Tasks should be concrete and actionable, not abstract
- Each phase should have clear deliverables and acceptance criteria"#;

/// The instruction sent to Gemini when enhancing a base prompt.
pub fn build_reasoning_prompt(descriptor: &ProjectDescriptor, base_prompt: &str) -> String {
    let team_instruction = if descriptor.project_type.is_team() {
        TEAM_FRAMEWORK_INSTRUCTION
    } else {
        ""
    };

    format!(
        "You are a principal architect at a top tech company. Give exact recommendations, not options. Make decisive technical choices based on what actually works in production.

Project Type: {}
Project Name: {}
Project Description: {}
Requirements: {}

{}Base Prompt:
{}

{}",
        descriptor.project_type,
        descriptor.name,
        descriptor
            .description
            .as_deref()
            .unwrap_or("No description provided"),
        descriptor.needs_list(),
        team_instruction,
        base_prompt,
        ENHANCEMENT_SECTIONS
    )
}

/// The shorter one-shot analysis behind `get_recommendations`.
pub fn build_analysis_prompt(descriptor: &ProjectDescriptor) -> String {
    format!(
        "As a software architect, analyze these project requirements and provide specific recommendations:

Project Type: {}
Requirements: {}

Provide:
1. Optimal technology stack with reasoning
2. Architecture pattern (monolithic, microservices, serverless, etc.)
3. Key integration points and data flow
4. Security considerations
5. Performance optimization strategies
6. Development timeline estimation

Be specific and practical, focusing on modern best practices.",
        descriptor.project_type,
        descriptor.needs_list()
    )
}

pub fn merge_enhanced_prompt(base_prompt: &str, enhanced_content: &str) -> String {
    format!(
        "{base_prompt}\n\n---\n\n{ENHANCED_HEADING}\n\n{enhanced_content}\n\n---\n\n{ATTRIBUTION_NOTE}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{NeedTag, ProjectType};

    #[test]
    fn reasoning_prompt_embeds_descriptor_and_base() {
        let descriptor = ProjectDescriptor::new(ProjectType::WebApp, "Atlas")
            .with_description("Map sharing for field teams")
            .with_needs([NeedTag::Database, NeedTag::Other("maps".into())]);

        let prompt = build_reasoning_prompt(&descriptor, "BASE");
        assert!(prompt.contains(
            "Project Type: webapp\nProject Name: Atlas\nProject Description: Map sharing for field teams\nRequirements: database, maps\n\nBase Prompt:\nBASE\n\n"
        ));
        assert!(prompt.contains("## 🏗️ Architecture Analysis"));
        assert!(prompt.contains("| Problem | Why It Happens | Fix It With |"));
        assert!(prompt.contains("\n\nIMPORTANT: \n- Use the project description"));
        assert!(!prompt.contains("Multi-Agent Framework"));
    }

    #[test]
    fn missing_description_has_placeholder() {
        let descriptor = ProjectDescriptor::new(ProjectType::Api, "Atlas");
        let prompt = build_reasoning_prompt(&descriptor, "BASE");
        assert!(prompt.contains("Project Description: No description provided\n"));
        assert!(prompt.contains("Requirements: \n"));
    }

    #[test]
    fn team_asks_for_framework_before_base() {
        let descriptor = ProjectDescriptor::new(ProjectType::Team, "Swarm");
        let prompt = build_reasoning_prompt(&descriptor, "BASE");
        let framework = prompt.find("Multi-Agent Framework:").unwrap();
        let base = prompt.find("Base Prompt:\nBASE").unwrap();
        assert!(framework < base);
    }

    #[test]
    fn analysis_prompt_lists_type_and_needs() {
        let descriptor = ProjectDescriptor::new(ProjectType::Mobile, "Atlas")
            .with_needs([NeedTag::Payments, NeedTag::Ai]);
        let prompt = build_analysis_prompt(&descriptor);
        assert!(prompt.contains("Project Type: mobile\nRequirements: payments, ai\n"));
        assert!(prompt.contains("6. Development timeline estimation"));
    }

    #[test]
    fn merge_places_insights_under_heading() {
        let merged = merge_enhanced_prompt("BASE", "INSIGHTS");
        assert_eq!(
            merged,
            format!("BASE\n\n---\n\n{ENHANCED_HEADING}\n\nINSIGHTS\n\n---\n\n{ATTRIBUTION_NOTE}")
        );
    }
}

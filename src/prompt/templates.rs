// Fixed prompt templates, one per project type.
//
// Every template renders in the same order: role and approach, name,
// requirements, tools (or platform) block, closing section. Downstream tools
// rely on that order.

use crate::project::{NeedTag, ProjectDescriptor};
use crate::prompt::tools::recommend_tools;

fn push_requirements(prompt: &mut String, needs: &[NeedTag], label: fn(&NeedTag) -> &str) {
    for need in needs {
        prompt.push_str(&format!("- {}\n", label(need)));
    }
}

fn push_tools(prompt: &mut String, needs: &[NeedTag]) {
    for tool in recommend_tools(needs) {
        prompt.push_str(&format!("- {tool}\n"));
    }
}

// ============================================================================
// Agent (also used for teams and unrecognized types)
// ============================================================================

fn agent_label(need: &NeedTag) -> &str {
    match need {
        NeedTag::UserAuth => "User authentication and management",
        NeedTag::Database => "Data persistence and retrieval",
        NeedTag::Realtime => "Real-time communication features",
        NeedTag::Files => "File upload and storage",
        NeedTag::Ai => "AI/LLM integration",
        NeedTag::Payments => "Payment processing",
        NeedTag::Email => "Email notifications",
        NeedTag::Analytics => "Usage analytics",
        NeedTag::Search => "Search functionality",
        NeedTag::Other(raw) => raw,
    }
}

pub const TEAM_FRAMEWORK_LINE: &str = "- Recommend a multi-agent framework (e.g., Sequential, Parallel, A2A) and justify the choice based on the project requirements.\n";

/// `framework_note` adds the multi-agent framework bullet to the team
/// structure; it has no effect on single agents.
pub fn agent_prompt(descriptor: &ProjectDescriptor, framework_note: bool) -> String {
    let mut prompt = String::from(
        "**Role:** You are a senior principal engineer with 15+ years building production AI systems.\n\n",
    );
    prompt.push_str(
        "**Approach:** Provide exact, battle-tested solutions. No options or alternatives - just the best approach.\n\n",
    );
    prompt.push_str(&format!("**Project Name:** {}\n\n", descriptor.name));

    if descriptor.project_type.is_team() {
        prompt.push_str("**Agent Type:** Team of Agents\n\n");
        prompt.push_str("**Team Structure:**\n");
        prompt.push_str("- Define a primary agent and the necessary sub-agents.\n");
        prompt.push_str("- Specify the roles and responsibilities for each agent.\n");
        prompt.push_str("- Detail the communication protocol between the agents.\n");
        if framework_note {
            prompt.push_str(TEAM_FRAMEWORK_LINE);
        }
    } else {
        prompt.push_str("**Agent Type:** Single Agent\n\n");
    }

    prompt.push_str("**Requirements:**\n");
    push_requirements(&mut prompt, &descriptor.needs, agent_label);

    prompt.push_str("\n**Recommended Tools:**\n");
    push_tools(&mut prompt, &descriptor.needs);

    prompt.push_str("\n**What You'll Build:**\n");
    prompt.push_str("1. Production-ready code - Not a prototype\n");
    prompt.push_str("2. Docker Compose setup - One command to run\n");
    prompt.push_str("3. .env.example with ALL variables\n");
    prompt.push_str("4. Deployment scripts for Railway/Fly.io\n");
    prompt.push_str("5. Monitoring with Sentry already integrated\n");

    prompt
}

// ============================================================================
// Web app
// ============================================================================

fn webapp_label(need: &NeedTag) -> &str {
    match need {
        NeedTag::UserAuth => "User authentication and management",
        NeedTag::Database => "Data persistence and retrieval",
        NeedTag::Realtime => "Real-time updates",
        NeedTag::Files => "File upload and storage",
        NeedTag::Ai => "AI/LLM features",
        NeedTag::Payments => "Payment processing",
        NeedTag::Email => "Email notifications",
        NeedTag::Analytics => "User analytics",
        NeedTag::Search => "Search functionality",
        NeedTag::Other(raw) => raw,
    }
}

pub fn webapp_prompt(descriptor: &ProjectDescriptor) -> String {
    let mut prompt = String::from(
        "**Role:** You are a tech lead who ships production apps at scale. You make decisions, not suggestions.\n\n",
    );
    prompt.push_str(
        "**Approach:** Exact tech stack, no alternatives. Production-ready patterns only.\n\n",
    );
    prompt.push_str(&format!("**Project Name:** {}\n\n", descriptor.name));

    prompt.push_str("**Requirements:**\n");
    push_requirements(&mut prompt, &descriptor.needs, webapp_label);

    prompt.push_str("\n**EXACT Stack (Use These, Period):**\n");
    prompt.push_str("- **Framework:** Next.js 14 App Router - No Pages Router\n");
    prompt.push_str("- **Styling:** Tailwind CSS + shadcn/ui - No other UI libraries\n");
    prompt.push_str("- **State:** Zustand for complex, Context for simple - No Redux\n");
    prompt.push_str("- **Forms:** react-hook-form + zod - No Formik\n");
    prompt.push_str("- **Deployment:** Vercel - No alternatives\n");
    push_tools(&mut prompt, &descriptor.needs);

    prompt.push_str("\n**Exact Implementation:**\n");
    prompt.push_str("1. Feature-based folder structure - /features/[feature]/\n");
    prompt.push_str("2. Server Components by default, Client only when needed\n");
    prompt.push_str("3. API routes in /app/api using Route Handlers\n");
    prompt.push_str("4. Prisma schema with proper indexes from day 1\n");
    prompt.push_str("5. Auth middleware protecting all routes except public\n");
    prompt.push_str("6. GitHub Actions CI/CD to Vercel ready to go\n");

    prompt
}

// ============================================================================
// Mobile
// ============================================================================

fn mobile_label(need: &NeedTag) -> &str {
    match need {
        NeedTag::UserAuth => "User authentication",
        NeedTag::Database => "Local and cloud data storage",
        NeedTag::Realtime => "Real-time features",
        NeedTag::Files => "Media handling",
        NeedTag::Ai => "AI features",
        NeedTag::Payments => "In-app purchases",
        NeedTag::Email => "Push notifications",
        NeedTag::Analytics => "User tracking",
        NeedTag::Search => "Content search",
        NeedTag::Other(raw) => raw,
    }
}

pub fn mobile_prompt(descriptor: &ProjectDescriptor) -> String {
    let mut prompt = String::from(
        "**Role:** You are a mobile architect who ships apps to millions. You know what works.\n\n",
    );
    prompt.push_str("**Approach:** One stack, best practices, no debates.\n\n");
    prompt.push_str(&format!("**Project Name:** {}\n\n", descriptor.name));

    prompt.push_str("**Requirements:**\n");
    push_requirements(&mut prompt, &descriptor.needs, mobile_label);

    prompt.push_str("\n**THE Stack:**\n");
    prompt.push_str("- **Framework:** React Native + Expo - No Flutter debates\n");
    prompt.push_str("- **State:** Zustand - No MobX, No Redux\n");
    prompt.push_str("- **Navigation:** React Navigation v6 - The standard\n");
    prompt.push_str("- **Development:** Expo Go for dev, EAS Build for production\n");
    push_tools(&mut prompt, &descriptor.needs);

    prompt
}

// ============================================================================
// API
// ============================================================================

fn api_label(need: &NeedTag) -> &str {
    match need {
        NeedTag::UserAuth => "Authentication & authorization",
        NeedTag::Database => "Data persistence",
        NeedTag::Realtime => "WebSocket connections",
        NeedTag::Files => "File handling",
        NeedTag::Ai => "AI service integration",
        NeedTag::Payments => "Payment processing",
        NeedTag::Email => "Email service",
        NeedTag::Analytics => "API analytics",
        NeedTag::Search => "Search endpoints",
        NeedTag::Other(raw) => raw,
    }
}

pub fn api_prompt(descriptor: &ProjectDescriptor) -> String {
    let mut prompt = String::from(
        "**Role:** You are a backend architect who builds APIs that scale to billions of requests.\n\n",
    );
    prompt.push_str("**Approach:** Production patterns only. One way to do things right.\n\n");
    prompt.push_str(&format!("**Project Name:** {}\n\n", descriptor.name));

    prompt.push_str("**Requirements:**\n");
    push_requirements(&mut prompt, &descriptor.needs, api_label);

    prompt.push_str("\n**THE Backend Stack:**\n");
    prompt.push_str("- **Runtime:** Node.js + TypeScript - Bun isn't ready for production\n");
    prompt.push_str("- **Framework:** Fastify - Faster than Express, better DX\n");
    prompt.push_str("- **API Style:** REST with OpenAPI 3.1 - GraphQL only if truly needed\n");
    prompt.push_str("- **Validation:** Zod everywhere - Type safety from edge to DB\n");
    prompt.push_str("- **ORM:** Prisma - Best DX, type-safe queries\n");
    push_tools(&mut prompt, &descriptor.needs);

    prompt.push_str("\n**Non-Negotiable Architecture:**\n");
    prompt.push_str("1. RESTful routes: GET /items, POST /items, etc.\n");
    prompt.push_str("2. Consistent error format: { error: { code, message } }\n");
    prompt.push_str("3. JWT auth with refresh tokens - 15min/7day expiry\n");
    prompt.push_str("4. Rate limiting: 100 req/min per IP, 1000 per user\n");
    prompt.push_str("5. Global error handler - Never leak stack traces\n");
    prompt.push_str("6. Request ID tracking - Every request gets traced\n");

    prompt
}

// ============================================================================
// Workflow automation
// ============================================================================

fn workflow_label(need: &NeedTag) -> &str {
    match need {
        NeedTag::UserAuth => "User verification steps",
        NeedTag::Database => "Data storage nodes",
        NeedTag::Realtime => "Real-time triggers",
        NeedTag::Files => "File processing",
        NeedTag::Ai => "AI processing nodes",
        NeedTag::Payments => "Payment triggers",
        NeedTag::Email => "Email automation",
        NeedTag::Analytics => "Workflow analytics",
        NeedTag::Search => "Data lookup nodes",
        NeedTag::Other(raw) => raw,
    }
}

/// Workflows pick an automation platform instead of a tool list.
pub fn workflow_prompt(descriptor: &ProjectDescriptor) -> String {
    let mut prompt = String::from(
        "**Role:** You architect automation that saves companies millions in operational costs.\n\n",
    );
    prompt.push_str("**Approach:** Best tool for the job. No compromise on reliability.\n\n");
    prompt.push_str(&format!("**Workflow Name:** {}\n\n", descriptor.name));

    prompt.push_str("**Requirements:**\n");
    push_requirements(&mut prompt, &descriptor.needs, workflow_label);

    prompt.push_str("\n**Platform Decision:**\n");
    prompt.push_str("- **For Engineers:** n8n self-hosted - Full control, code when needed\n");
    prompt.push_str("- **For Non-Technical:** Make.com - Visual, reliable, great support\n");
    prompt.push_str("- **Never:** Zapier for complex workflows - Too limited\n");

    prompt.push_str("\n**Workflow Components:**\n");
    prompt.push_str("1. Triggers (what starts the workflow)\n");
    prompt.push_str("2. Actions (what the workflow does)\n");
    prompt.push_str("3. Conditions (decision points)\n");
    prompt.push_str("4. Error handling\n");

    prompt
}

// ============================================================================
// Product requirements document
// ============================================================================

fn product_label(need: &NeedTag) -> &str {
    match need {
        NeedTag::UserAuth => "User account system with authentication",
        NeedTag::Database => "Data storage and management",
        NeedTag::Realtime => "Real-time features and live updates",
        NeedTag::Files => "File upload and management",
        NeedTag::Ai => "AI-powered features",
        NeedTag::Payments => "Payment and subscription handling",
        NeedTag::Email => "Email notifications and communications",
        NeedTag::Analytics => "Analytics and reporting dashboard",
        NeedTag::Search => "Search and discovery features",
        NeedTag::Other(raw) => raw,
    }
}

pub fn product_prompt(descriptor: &ProjectDescriptor) -> String {
    let mut prompt = String::from(
        "**Role:** You are a VP of Product who ships features users actually want.\n\n",
    );
    prompt.push_str("**Approach:** Clear specs, no ambiguity. Technical decisions included.\n\n");
    prompt.push_str(&format!("**Product Name:** {}\n\n", descriptor.name));

    prompt.push_str("**Core Features:**\n");
    push_requirements(&mut prompt, &descriptor.needs, product_label);

    prompt.push_str("\n**Recommended Technical Stack:**\n");
    push_tools(&mut prompt, &descriptor.needs);

    prompt.push_str("\n**PRD Sections to Include:**\n");
    prompt.push_str("1. Executive Summary\n");
    prompt.push_str("2. Problem Statement\n");
    prompt.push_str("3. User Personas\n");
    prompt.push_str("4. User Stories\n");
    prompt.push_str("5. Feature Specifications\n");
    prompt.push_str("6. Technical Requirements\n");
    prompt.push_str("7. Success Metrics\n");
    prompt.push_str("8. Timeline and Milestones\n");

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::ProjectType;

    fn descriptor(project_type: ProjectType, needs: &[&str]) -> ProjectDescriptor {
        ProjectDescriptor::new(project_type, "Orbit")
            .with_needs(needs.iter().map(|n| NeedTag::parse(n)))
    }

    fn index_of(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("missing {needle:?} in:\n{haystack}"))
    }

    #[test]
    fn agent_sections_are_ordered() {
        let prompt = agent_prompt(&descriptor(ProjectType::Agent, &["database"]), false);

        let role = index_of(&prompt, "**Role:**");
        let name = index_of(&prompt, "**Project Name:** Orbit");
        let kind = index_of(&prompt, "**Agent Type:** Single Agent");
        let reqs = index_of(&prompt, "**Requirements:**\n- Data persistence and retrieval\n");
        let tools = index_of(&prompt, "**Recommended Tools:**\n- **Database:** Supabase");
        let closing = index_of(&prompt, "**What You'll Build:**");

        assert!(role < name && name < kind && kind < reqs && reqs < tools && tools < closing);
        assert!(prompt.ends_with("5. Monitoring with Sentry already integrated\n"));
    }

    #[test]
    fn team_branch_adds_structure() {
        let team = descriptor(ProjectType::Team, &[]);

        let without_note = agent_prompt(&team, false);
        assert!(without_note.contains("**Agent Type:** Team of Agents\n\n**Team Structure:**\n"));
        assert!(!without_note.contains(TEAM_FRAMEWORK_LINE));

        let with_note = agent_prompt(&team, true);
        assert!(with_note.contains(
            "- Detail the communication protocol between the agents.\n- Recommend a multi-agent framework"
        ));
        // No blank line between the team bullets and the requirements header.
        assert!(with_note.contains("project requirements.\n**Requirements:**\n"));
    }

    #[test]
    fn framework_note_ignored_for_single_agent() {
        let prompt = agent_prompt(&descriptor(ProjectType::Agent, &[]), true);
        assert!(!prompt.contains("Team Structure"));
        assert!(!prompt.contains(TEAM_FRAMEWORK_LINE));
    }

    #[test]
    fn label_tables_differ_per_template() {
        let needs = &["files", "email"];
        let webapp = webapp_prompt(&descriptor(ProjectType::WebApp, needs));
        let mobile = mobile_prompt(&descriptor(ProjectType::Mobile, needs));

        assert!(webapp
            .contains("**Requirements:**\n- File upload and storage\n- Email notifications\n"));
        assert!(mobile.contains("**Requirements:**\n- Media handling\n- Push notifications\n"));
    }

    #[test]
    fn requirements_follow_input_order_with_raw_fallback() {
        let prompt = api_prompt(&descriptor(ProjectType::Api, &["search", "graphql", "user_auth"]));
        assert!(prompt.contains(
            "**Requirements:**\n- Search endpoints\n- graphql\n- Authentication & authorization\n"
        ));
    }

    #[test]
    fn webapp_tools_follow_stack_block() {
        let prompt = webapp_prompt(&descriptor(ProjectType::WebApp, &["payments"]));
        assert!(prompt.contains(
            "- **Deployment:** Vercel - No alternatives\n- **Payments:** Stripe"
        ));
        assert!(prompt.ends_with("6. GitHub Actions CI/CD to Vercel ready to go\n"));
    }

    #[test]
    fn mobile_ends_with_tools() {
        let prompt = mobile_prompt(&descriptor(ProjectType::Mobile, &["analytics"]));
        assert!(prompt.ends_with(
            "- **Analytics:** PostHog - Complete product analytics, self-hostable option\n"
        ));
    }

    #[test]
    fn workflow_has_platform_block_and_no_tools() {
        let prompt = workflow_prompt(&descriptor(ProjectType::Workflow, &["database", "payments"]));
        assert!(prompt.contains("**Workflow Name:** Orbit"));
        assert!(prompt.contains("- Data storage nodes\n- Payment triggers\n"));
        assert!(prompt.contains("**Platform Decision:**"));
        assert!(!prompt.contains("Supabase"));
        assert!(!prompt.contains("Stripe"));
        assert!(prompt.ends_with("4. Error handling\n"));
    }

    #[test]
    fn product_reuses_tools_then_lists_sections() {
        let prompt = product_prompt(&descriptor(ProjectType::Product, &["ai"]));
        let stack = index_of(&prompt, "**Recommended Technical Stack:**\n- **AI Integration:**");
        let sections = index_of(&prompt, "**PRD Sections to Include:**");
        assert!(stack < sections);
        assert!(prompt.contains("**Product Name:** Orbit"));
        assert!(prompt.contains("**Core Features:**\n- AI-powered features\n"));
    }

    #[test]
    fn empty_needs_leave_headers_in_place() {
        let prompt = agent_prompt(&descriptor(ProjectType::Agent, &[]), false);
        assert!(prompt
            .contains("**Requirements:**\n\n**Recommended Tools:**\n\n**What You'll Build:**"));
    }
}

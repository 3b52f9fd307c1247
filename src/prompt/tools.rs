use crate::project::NeedTag;

/// Picks concrete tools for the requested needs.
///
/// Membership only: the result follows the rule order below, not the order of
/// `needs`. A database brings its own auth, storage and realtime, so those
/// standalone picks are suppressed when `database` is present.
pub fn recommend_tools(needs: &[NeedTag]) -> Vec<String> {
    let has = |need: NeedTag| needs.contains(&need);
    let database = has(NeedTag::Database);
    let mut recommendations = Vec::new();

    if database {
        recommendations.push(
            "**Database:** Supabase - PostgreSQL with built-in auth, realtime, storage. No other DB needed.",
        );
    }

    if has(NeedTag::UserAuth) && !database {
        recommendations.push(
            "**Authentication:** Clerk - Production-ready auth with social logins. Skip NextAuth.",
        );
    }

    if has(NeedTag::Files) {
        if database {
            recommendations.push("**File Storage:** Supabase Storage (already included with DB)");
        } else {
            recommendations
                .push("**File Storage:** Vercel Blob - Integrated with deployment platform");
        }
    }

    if has(NeedTag::Realtime) && !database {
        recommendations.push("**Realtime:** Socket.io - Battle-tested WebSocket solution");
    }

    if has(NeedTag::Ai) {
        recommendations.push("**AI Integration:** OpenAI API - Industry standard with GPT-4 turbo");
    }

    if has(NeedTag::Payments) {
        recommendations
            .push("**Payments:** Stripe - Industry standard, comprehensive docs, battle-tested");
    }

    if has(NeedTag::Email) {
        recommendations
            .push("**Email Service:** Resend - Modern email API, great DX, reliable delivery");
    }

    if has(NeedTag::Analytics) {
        recommendations
            .push("**Analytics:** PostHog - Complete product analytics, self-hostable option");
    }

    if has(NeedTag::Search) {
        recommendations.push("**Search:** Algolia - Instant search, excellent React components");
    }

    recommendations.into_iter().map(str::to_string).collect()
}

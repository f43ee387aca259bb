// Prompt fragments shared by every extraction call.
// Feature-specific prompts live in that feature's own prompts.rs.

/// System prompt for calls whose reply is parsed as JSON.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise data extraction assistant. \
    Respond with a single valid JSON object and nothing else. \
    Do not wrap it in markdown code fences. \
    Do not add explanations, notes or apologies.";

// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Instruction that enforces a bare JSON object as the whole reply.
pub const JSON_ONLY_INSTRUCTION: &str = "Return your response in the following JSON format only \
    (no additional text, no markdown code fences, no explanations):";

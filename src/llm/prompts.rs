/// System instruction for the minutes summarizer.
pub const MINUTES_SYSTEM_PROMPT: &str = "You are a professional meeting minutes summarizer. \
Your task is to create clear, concise, and well-structured meeting minutes. \
Always follow the exact format provided in the prompt. \
Focus on extracting actionable items, decisions, and key points. \
If any section has no relevant information, write 'None' for that section.";

/// Build the user prompt embedding a transcript.
pub fn build_minutes_prompt(transcript: &str) -> String {
    format!(
        "Please convert the following meeting transcript into well-structured meeting minutes.\n\
Follow this exact format:\n\
\n\
# Meeting Minutes\n\
\n\
## Key Points\n\
- [List the main topics discussed]\n\
- [Include important decisions made]\n\
- [Note any significant announcements]\n\
\n\
## Action Items\n\
- [Task 1] - [Owner] - [Deadline if mentioned]\n\
- [Task 2] - [Owner] - [Deadline if mentioned]\n\
\n\
## Decisions Made\n\
- [Decision 1]\n\
- [Decision 2]\n\
\n\
## Next Steps\n\
- [Next meeting date if mentioned]\n\
- [Follow-up actions]\n\
\n\
## Additional Notes\n\
- [Any other relevant information]\n\
\n\
Here is the transcript:\n\
{transcript}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_demands_all_five_sections() {
        let prompt = build_minutes_prompt("we agreed to ship on friday");

        for section in [
            "## Key Points",
            "## Action Items",
            "## Decisions Made",
            "## Next Steps",
            "## Additional Notes",
        ] {
            assert!(prompt.contains(section), "missing section: {section}");
        }
        assert!(prompt.ends_with("we agreed to ship on friday"));
    }

    #[test]
    fn system_prompt_requires_none_for_empty_sections() {
        assert!(MINUTES_SYSTEM_PROMPT.contains("write 'None'"));
    }
}

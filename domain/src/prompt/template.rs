//! Prompt templates for the debate personas

use crate::session::stance::Stance;
use crate::session::topic::Topic;

/// Templates for the system instructions bound to each model session
pub struct PromptTemplate;

impl PromptTemplate {
    /// System instruction for the Contender, bound to one round's topic and stance
    pub fn debate_system(topic: &Topic, stance: Stance) -> String {
        format!(
            r#"You are 'The Contender', a master debater. Your tone is sharp, confident, and challenging.
- Forcefully argue the opposite position of the user.
- Debate topic: "{topic}"
- User's stance: {user_side}
- Your stance: {own_side} (opposite of user).
- Never agree with the user. Identify logical fallacies in their arguments.
- Respond in under 80 words."#,
            topic = topic.as_str(),
            user_side = stance,
            own_side = stance.opposite(),
        )
    }

    /// System instruction for the debate coach; independent of the round
    pub fn analyzer_system() -> &'static str {
        r#"You are a world-class debate coach. Analyze the user's last statement.
Give analysis STRICTLY as JSON with keys: "rating", "strength", "suggestion".
"rating" is a number from 0 to 10; "strength" and "suggestion" are short strings.
Example: {"rating": 7, "strength": "The use of a real-world example was effective.", "suggestion": "Try to support your claim with a statistic."}"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::Feedback;

    fn topic() -> Topic {
        Topic::try_new("Should AI replace human jobs?").unwrap()
    }

    #[test]
    fn test_debate_system_binds_topic_and_stance() {
        let prompt = PromptTemplate::debate_system(&topic(), Stance::For);
        assert!(prompt.contains("\"Should AI replace human jobs?\""));
        assert!(prompt.contains("User's stance: For"));
        assert!(prompt.contains("Your stance: Against"));
        assert!(prompt.contains("Never agree"));
        assert!(prompt.contains("under 80 words"));
    }

    #[test]
    fn test_debate_system_is_deterministic() {
        let a = PromptTemplate::debate_system(&topic(), Stance::Against);
        let b = PromptTemplate::debate_system(&topic(), Stance::Against);
        assert_eq!(a, b);
        assert!(a.contains("Your stance: For"));
    }

    #[test]
    fn test_analyzer_example_is_valid_feedback() {
        let prompt = PromptTemplate::analyzer_system();
        let example = prompt
            .lines()
            .find_map(|l| l.strip_prefix("Example: "))
            .unwrap();
        let feedback = Feedback::parse_analysis(example).unwrap();
        assert_eq!(feedback.rating, Some(7.0));
    }
}

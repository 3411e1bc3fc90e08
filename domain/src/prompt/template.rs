//! Prompt templates for debate rounds and paper synthesis

use crate::debate::round::RoundPrompt;
use crate::participant::entities::Participant;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt for one participant
    ///
    /// `topic_context` is the background text for the topic.
    pub fn debater_system(participant: &Participant, topic: &str, topic_context: &str) -> String {
        format!(
            r#"You are {name}, one of several AI perspectives taking part in a structured debate.
Your assigned stance is {stance}: {posture}.

Debate topic: "{topic}"

Background:
{topic_context}

Stay in your stance for the whole debate. Support your points with evidence and reasoning.
When you rely on a source, cite it inline as a markdown link: [title](url)."#,
            name = participant.name,
            stance = participant.stance,
            posture = participant.stance.posture(),
        )
    }

    /// User prompt for the given round or follow-up
    pub fn user_prompt(topic: &str, prompt: &RoundPrompt) -> String {
        match prompt {
            RoundPrompt::Round(round) => Self::round_prompt(topic, *round),
            RoundPrompt::FollowUp(question) => Self::follow_up_prompt(topic, question),
        }
    }

    /// User prompt for a numbered round
    pub fn round_prompt(topic: &str, round: u32) -> String {
        if round <= 1 {
            format!(
                r#"Research the topic "{}" and present your opening position.

Cover the strongest arguments for your stance, the key evidence behind them, and the
implications if your view is correct."#,
                topic
            )
        } else {
            format!(
                r#"This is round {} of the debate on "{}".

Continue the debate with further analysis. Deepen your earlier arguments, address the
likely objections from the other perspectives, and bring in evidence not yet discussed."#,
                round, topic
            )
        }
    }

    /// User prompt answering an audience question
    pub fn follow_up_prompt(topic: &str, question: &str) -> String {
        format!(
            r#"An audience member asks a follow-up question in the debate on "{}":

{}

Answer the question directly from your stance, then relate it back to your main arguments."#,
            topic, question
        )
    }

    /// Default system message for the research paper request
    pub fn paper_system(topic: &str) -> String {
        format!(
            "Generate a comprehensive research paper on the topic: \"{topic}\". \
The paper should synthesize multiple perspectives in an academic format, with an abstract, \
introduction, analysis of different viewpoints, discussion, conclusion, and references. \
Maintain an objective, scholarly tone throughout."
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::participant::entities::Stance;

    #[test]
    fn test_debater_system_names_stance_and_context() {
        let participant = Participant::new(2, "Perspective B", Stance::Against, "Claude");
        let prompt = PromptTemplate::debater_system(&participant, "Is AI a threat?", "Background text.");
        assert!(prompt.contains("Perspective B"));
        assert!(prompt.contains("Against"));
        assert!(prompt.contains("\"Is AI a threat?\""));
        assert!(prompt.contains("Background text."));
    }

    #[test]
    fn test_round_prompts_differ_by_round() {
        let opening = PromptTemplate::round_prompt("Space", 1);
        let later = PromptTemplate::round_prompt("Space", 3);
        assert!(opening.contains("opening position"));
        assert!(later.contains("round 3"));
    }

    #[test]
    fn test_user_prompt_embeds_follow_up_question() {
        let prompt = PromptTemplate::user_prompt(
            "Space",
            &RoundPrompt::FollowUp("What about Mars?".to_string()),
        );
        assert!(prompt.contains("What about Mars?"));
    }

    #[test]
    fn test_paper_system_message() {
        let message = PromptTemplate::paper_system("UBI");
        assert!(message.starts_with("Generate a comprehensive research paper on the topic: \"UBI\"."));
        assert!(message.ends_with("Maintain an objective, scholarly tone throughout."));
    }
}

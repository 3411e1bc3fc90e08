//! Predefined topics and their background text

const KNOWN_TOPICS: [(&str, &str); 5] = [
    (
        "Is AI a threat to humanity?",
        "This debate explores the potential risks of advanced artificial intelligence systems. \
The question involves considerations of technological capabilities, ethical frameworks, \
regulatory approaches, and philosophical questions about consciousness and control. Key areas \
of focus include existential risks, job displacement, autonomous weapons, privacy concerns, \
and bias in AI systems.",
    ),
    (
        "Should cryptocurrency be regulated?",
        "This debate examines the role of government regulation in cryptocurrency markets. \
Topics include concerns about market volatility, consumer protection, financial stability, \
crime prevention, environmental impact, and innovation. The debate touches on economics, law, \
technology, and governance.",
    ),
    (
        "Is climate change the biggest threat facing humanity?",
        "This debate explores the severity and urgency of climate change relative to other \
global challenges. Areas of discussion include scientific consensus, economic impacts, health \
effects, national security, technological solutions, and intergenerational ethics. The topic \
spans science, economics, politics, and ethics.",
    ),
    (
        "Should universal basic income be implemented?",
        "This debate examines the potential benefits and drawbacks of providing all citizens \
with a regular stipend regardless of employment status. Topics include economic feasibility, \
social welfare, labor market effects, automation responses, wealth inequality, and human \
dignity. The discussion involves economics, social policy, politics, and philosophy.",
    ),
    (
        "Is space exploration worth the cost?",
        "This debate evaluates whether the financial investment in space exploration yields \
sufficient benefits to humanity. Areas of focus include scientific advancement, technological \
innovation, resource utilization, national prestige, existential risk mitigation, and \
opportunity costs. The topic spans economics, science, technology, and ethics.",
    ),
];

/// The built-in topics, in presentation order
pub fn predefined_topics() -> Vec<&'static str> {
    KNOWN_TOPICS.iter().map(|(topic, _)| *topic).collect()
}

/// Background text for a topic
///
/// Exact match on the topic text; unknown topics get a generic overview.
pub fn topic_context(topic: &str) -> String {
    KNOWN_TOPICS
        .iter()
        .find(|(known, _)| *known == topic)
        .map(|(_, context)| (*context).to_string())
        .unwrap_or_else(|| {
            format!(
                "This debate explores multiple perspectives on \"{}\". The topic has significant \
implications across various domains including ethics, politics, technology, and social impact. \
The AI debaters will present research-backed arguments from different viewpoints, helping to \
provide a comprehensive understanding of the subject matter.",
                topic
            )
        })
}

//! Prompt rendering for one chunk of labels.

const PROMPT_HEADER: &str = r#"I have a list of technology-related words.
I need you to give a confidence score between 0 and 1 for each word based on how strongly related/connected
the English or Finnish word is specifically to the manufacturing industry or in Finnish "valmistava teollisuus".
The score should be 0 if the word is not related at all and 1 if the word is very strongly related. The words could
be related to manufacturing either in the context of skills required to working in the manufacturing industry or
in the context of manufacturing itself such as manufacturing processes, tools, or technologies etc.
Never skip over any words. Every single word must be rated even if they are duplicates or whatever.

Return your answer strictly as a JSON array with no additional text, comments, or explanations.
Example response format:

[
  { "word": "word1", "confidence_score": 0.5, "id": "1" },
  { "word": "word2", "confidence_score": 0.8, "id": "2" }
]

Here are the words you need to rate:
"#;

/// Renders the scoring prompt; labels are listed one per line in chunk order.
pub fn build_prompt<S: AsRef<str>>(labels: &[S]) -> String {
    let body_len: usize = labels.iter().map(|l| l.as_ref().len() + 1).sum();
    let mut prompt = String::with_capacity(PROMPT_HEADER.len() + body_len);
    prompt.push_str(PROMPT_HEADER);

    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            prompt.push('\n');
        }
        prompt.push_str(label.as_ref());
    }
    prompt.push('\n');
    prompt
}

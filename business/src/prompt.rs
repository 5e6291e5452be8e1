use serde_json::{Value, json};

/// Instruction sent to the model for `text`.
pub fn user_prompt(text: &str) -> String {
    format!(
        "Analyze this text/URL and suggest QR code styling: \"{text}\".\n\
         Answer in English.\n\
         Give a short label (e.g. \"Official Site\", \"Social Media\", \"Contact Info\"),\n\
         a hex primary color that fits the brand or the content,\n\
         a secondary/background hex color with good contrast (usually #FFFFFF or #F8FAFC),\n\
         and a short description of what the user will find."
    )
}

/// Structured output schema: four required string fields.
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "label": {
                "type": "STRING",
                "description": "Short catchy label for the QR code"
            },
            "primaryColor": {
                "type": "STRING",
                "description": "Hex color code for the brand"
            },
            "secondaryColor": {
                "type": "STRING",
                "description": "Hex color code for the background"
            },
            "description": {
                "type": "STRING",
                "description": "Short summary of the content"
            }
        },
        "required": ["label", "primaryColor", "secondaryColor", "description"]
    })
}

/// Full `generateContent` request body.
pub fn request_body(text: &str) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": user_prompt(text) }]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": response_schema()
        }
    })
}

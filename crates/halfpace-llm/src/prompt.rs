//! Prompt for the runner-vs-history comparison

/// System instruction sent with every comparison
pub const SYSTEM_PROMPT: &str = "Jesteś pomocnym asystentem analizującym biegi.";

/// Builds the comparison prompt from the runner's own words and a sample of
/// historical results
pub struct ComparisonPrompt {
    user_text: String,
    sample: String,
    predicted_half: Option<String>,
}

impl ComparisonPrompt {
    /// Create a new prompt builder
    pub fn new(user_text: impl Into<String>, sample: impl Into<String>) -> Self {
        Self {
            user_text: user_text.into(),
            sample: sample.into(),
            predicted_half: None,
        }
    }

    /// Mention the predicted half-marathon time so the model can refer to it
    pub fn with_prediction(mut self, predicted_half: impl Into<String>) -> Self {
        self.predicted_half = Some(predicted_half.into());
        self
    }

    /// Build the complete prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str("Użytkownik podał następujące informacje o sobie:\n");
        prompt.push_str(self.user_text.trim());
        prompt.push_str("\n\n");

        if let Some(predicted) = &self.predicted_half {
            prompt.push_str(&format!(
                "Szacowany czas półmaratonu (wzór Riegla): {}\n\n",
                predicted
            ));
        }

        if self.sample.trim().is_empty() {
            prompt.push_str("Brak danych historycznych z półmaratonów Wrocławskich.\n\n");
        } else {
            prompt.push_str("Oto przykładowe dane z półmaratonów Wrocławskich:\n");
            prompt.push_str(&self.sample);
            prompt.push_str("\n\n");
        }

        prompt.push_str(COMPARISON_INSTRUCTIONS);
        prompt
    }
}

const COMPARISON_INSTRUCTIONS: &str =
    "Na podstawie tego porównaj użytkownika z danymi i napisz wnioski w kilku zdaniach:";

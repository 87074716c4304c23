//! Prompt construction and collaborator queries for every AI-backed stage:
//! the nutrition estimate, health tips, healthier alternatives, food details
//! and recipe suggestions.
//!
//! All calls go through one cached path. Replies are memoized per
//! (prompt, image) so a prompt repeated within the TTL (the alternatives
//! query is issued for display and again during report assembly) costs a
//! single collaborator round-trip.

use base64::{engine::general_purpose, Engine};

use crate::analysis::response_parser::MacroRecord;
use crate::api_connection::connection::ApiConnectionError;
use crate::api_connection::endpoints::{GenerateContentRequest, Part, Provider, GEMINI_MODELS};
use crate::api_connection::response_cache::ResponseCache;
use crate::image_intake::ImageAttachment;

pub fn nutrition_prompt(portion: &str) -> String {
    format!(
        "You are a nutritionist AI. The user uploaded a food image and ate about {portion}. \
         Estimate nutritional values **without giving any ranges**. Return only the following in bullet points: \
         **Calories** (kcal), **Protein** (g), **Carbs** (g), **Fats** (g), and **Notable Vitamins/Minerals**. \
         Also suggest a name for this food item in this format: **Food Name**: [your suggestion]"
    )
}

pub fn health_tips_prompt(portion: &str) -> String {
    format!(
        "You are a nutritionist AI. The user is about to eat roughly {portion} of a meal. \
         Give 3 short, practical tips for keeping a meal of that size healthy. \
         Respond in bullet points."
    )
}

pub fn alternatives_prompt(macros: &MacroRecord) -> String {
    format!(
        "\
You are a professional nutritionist. A user uploaded food with this nutritional profile:
- Calories: {} kcal
- Protein: {} g
- Carbs: {} g
- Fats: {} g

Suggest 3 **healthier Food alternatives**. The alternatives must:
- Have **lower calories and fats**
- Include macro values in this format: Calories (kcal), Protein (g), Carbs (g), Fats (g)
- Include a brief explanation of why each alternative is healthier

Respond in bullet points with food names, their macros, and explanations.
",
        macros.calories, macros.protein, macros.carbs, macros.fats
    )
}

pub fn food_details_prompt(food_name: &str, macros: &MacroRecord, vitamins: &str) -> String {
    format!(
        "\
You are a professional nutritionist analyzing {food_name}. Provide detailed information about this food including:

1. **Cultural Origins**: Where does this dish originate from? What cultures traditionally eat it?
2. **Typical Ingredients**: List the main ingredients typically found in this dish
3. **Health Benefits**: Based on its nutritional profile (Calories: {} kcal, Protein: {}g, Carbs: {}g, Fats: {}g, Vitamins/Minerals: {vitamins}), what are the key health benefits?
4. **Potential Concerns**: Are there any potential health concerns with consuming this food regularly?
5. **Diet Compatibility**: Is this food suitable for: Vegetarian, Vegan, Keto, Gluten-free, Dairy-free diets?

Format your response with clear headings for each section.
",
        macros.calories, macros.protein, macros.carbs, macros.fats
    )
}

pub fn recipe_suggestions_prompt(food_name: &str) -> String {
    format!(
        "\
You are a professional chef specializing in healthy cooking. Provide:

1. **Traditional Recipe**: A classic recipe for {food_name} with ingredients and step-by-step instructions
2. **Healthier Variation**: A modified, healthier version of {food_name} with reduced calories/fats
3. **Dietary Adaptations**: How to adapt this recipe for: Vegetarian, Vegan, Keto, Gluten-free diets

Format your response with clear headings and bullet points for ingredients and numbered steps for instructions.
Include approximate preparation and cooking times.
"
    )
}

pub struct InsightClient {
    provider: Provider,
    model: String,
    cache: ResponseCache,
}

impl InsightClient {
    pub fn new(api_key_env_var: &str) -> Self {
        InsightClient {
            provider: Provider::gemini(api_key_env_var),
            model: GEMINI_MODELS[0].model_name.to_string(),
            cache: ResponseCache::default(),
        }
    }

    async fn ask(
        &self,
        prompt: &str,
        image: Option<&ImageAttachment>,
    ) -> Result<String, ApiConnectionError> {
        let image_bytes = image.map_or(&[][..], |img| img.bytes.as_slice());
        let key = ResponseCache::response_key(prompt, image_bytes);
        if let Some(cached) = self.cache.get(&key).await {
            return Ok(cached);
        }

        let mut parts = vec![Part::text(prompt)];
        if let Some(img) = image {
            parts.push(Part::inline_image(
                img.mime_type,
                general_purpose::STANDARD.encode(&img.bytes),
            ));
        }
        let request = GenerateContentRequest::from_parts(parts);
        let response = self
            .provider
            .call_generate_content(&self.model, request)
            .await?;
        let text = response
            .primary_text()
            .ok_or(ApiConnectionError::EmptyResponse)?;
        self.cache.insert(key, text.clone()).await;
        Ok(text)
    }

    /// The multimodal nutrition estimate for the submitted photo and portion.
    pub async fn nutrition_estimate(
        &self,
        image: &ImageAttachment,
        portion: &str,
    ) -> Result<String, ApiConnectionError> {
        self.ask(&nutrition_prompt(portion), Some(image)).await
    }

    pub async fn health_tips(&self, portion: &str) -> Result<String, ApiConnectionError> {
        self.ask(&health_tips_prompt(portion), None).await
    }

    pub async fn healthier_alternatives(
        &self,
        macros: &MacroRecord,
    ) -> Result<String, ApiConnectionError> {
        self.ask(&alternatives_prompt(macros), None).await
    }

    pub async fn food_details(
        &self,
        food_name: &str,
        macros: &MacroRecord,
        vitamins: &str,
    ) -> Result<String, ApiConnectionError> {
        self.ask(&food_details_prompt(food_name, macros, vitamins), None)
            .await
    }

    pub async fn recipe_suggestions(
        &self,
        food_name: &str,
    ) -> Result<String, ApiConnectionError> {
        self.ask(&recipe_suggestions_prompt(food_name), None).await
    }
}

//! Prompt construction for the Atelier pipeline.
//!
//! Every prompt is a pure function of its input: the same request renders
//! byte-identical text. Text prompts end with a JSON output directive and
//! one worked example of the expected shape.
//!
//! Persona descriptors only ever appear as context for the text model. The
//! image captions the text model is asked to write must describe garments
//! alone, and [`PromptRequest::OutfitImage`] only describes a wearer when
//! the caller explicitly supplies one.

mod document;

use atelier_core::{CreativityLevel, ExploreOutfitRequest, Persona, RecommendRequest};
use document::PromptDocument;
use serde_json::json;

/// Which template to render, with the inputs it needs.
#[derive(Debug, Clone, Copy, derive_more::Display)]
pub enum PromptRequest<'a> {
    /// Identify garment attributes from an accompanying photo.
    #[display("identify_attributes")]
    IdentifyAttributes,
    /// Name a garment from its attributes.
    #[display("clothing_name")]
    ClothingName {
        /// Garment attributes
        attributes: &'a [String],
    },
    /// Recommend an outfit from closet items.
    #[display("closet_recommendation")]
    ClosetRecommendation {
        /// Caller request
        request: &'a RecommendRequest,
        /// Validated creativity level
        creativity: CreativityLevel,
    },
    /// Suggest explorable fashion items.
    #[display("explore_items")]
    ExploreItems {
        /// Number of items to ask for
        count: u32,
    },
    /// Recommend an outfit built around selected explorable items.
    #[display("exploration_outfit")]
    ExplorationOutfit {
        /// Caller request
        request: &'a ExploreOutfitRequest,
        /// Validated creativity level
        creativity: CreativityLevel,
    },
    /// Caption for the image model.
    #[display("outfit_image")]
    OutfitImage {
        /// Garment-only outfit description
        outfit_description: &'a str,
        /// Wearer descriptors, only when the caller asked for them
        model: Option<&'a Persona>,
    },
}

/// Renders the prompt for `request`.
pub fn render(request: &PromptRequest<'_>) -> String {
    match request {
        PromptRequest::IdentifyAttributes => identify_attributes(),
        PromptRequest::ClothingName { attributes } => clothing_name(attributes),
        PromptRequest::ClosetRecommendation {
            request,
            creativity,
        } => closet_recommendation(request, *creativity),
        PromptRequest::ExploreItems { count } => explore_items(*count),
        PromptRequest::ExplorationOutfit {
            request,
            creativity,
        } => exploration_outfit(request, *creativity),
        PromptRequest::OutfitImage {
            outfit_description,
            model,
        } => outfit_image(outfit_description, *model),
    }
}

const CAPTION_RULE: &str = "imagePromptDetails 是给AI绘图模型使用的画面描述，只写衣物本身：款式、颜色、材质、配饰和整体风格。不要描写穿着者本人的任何特征。";

fn join_items(items: &[String]) -> String {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

fn persona_lines(document: PromptDocument, persona: &Persona) -> PromptDocument {
    if persona.is_empty() {
        return document;
    }
    document
        .instruction("请结合下列用户信息让推荐更贴合个人。")
        .line("用户性别", persona.gender_text())
        .line("用户年龄", persona.age().map(|age| format!("{}岁", age)))
        .line("用户体重", persona.weight_kg().map(|kg| format!("{}公斤", kg)))
        .line("用户身高", persona.height_cm().map(|cm| format!("{}厘米", cm)))
        .line("用户肤色", persona.skin_tone_text())
}

fn creativity_line(creativity: CreativityLevel) -> String {
    format!(
        "{}（{} 表示保守稳妥，{} 表示大胆前卫）",
        creativity,
        CreativityLevel::MIN,
        CreativityLevel::MAX
    )
}

fn identify_attributes() -> String {
    PromptDocument::new("你是一位AI时尚助手，负责识别图片中衣物的属性。")
        .instruction("请观察随附的衣物图片，列出它的中文属性，例如颜色、材质、风格和衣物类型。")
        .json_output(
            &["attributes"],
            json!({"attributes": ["红色", "棉布", "休闲", "连衣裙"]}),
        )
        .render()
}

fn clothing_name(attributes: &[String]) -> String {
    PromptDocument::new("你是一位AI时尚助手，负责为衣物起一个简洁的中文名称。")
        .line("衣物属性", Some(join_items(attributes)))
        .instruction("名称应为5到10个字，概括最有辨识度的属性。")
        .json_output(&["name"], json!({"name": "红色丝绸正式裙"}))
        .render()
}

fn closet_recommendation(request: &RecommendRequest, creativity: CreativityLevel) -> String {
    let document =
        PromptDocument::new("你是一位AI时尚造型师，请从用户衣橱里的衣物中推荐一套完整、时尚的搭配。");
    persona_lines(document, &request.persona)
        .line("用户心情", Some(&request.mood))
        .line("天气状况", Some(&request.weather))
        .line("衣橱中的可选衣物", Some(join_items(&request.closet_items)))
        .line("创意程度", Some(creativity_line(creativity)))
        .instruction("请根据创意程度调整搭配的独特性和前卫程度。")
        .instruction("recommendedOutfit 用自然流畅的中文详细描述这套搭配、搭配理由以及适合的场合。")
        .instruction(CAPTION_RULE)
        .instruction("如果无法写出有意义的画面描述，可以省略 imagePromptDetails。")
        .json_output(
            &["recommendedOutfit", "imagePromptDetails"],
            json!({
                "recommendedOutfit": "白色T恤搭配浅蓝色牛仔裤，清爽又有活力，适合晴天出游。",
                "imagePromptDetails": "一件宽松的白色纯棉T恤，搭配浅蓝色直筒牛仔裤和白色帆布鞋，整体风格休闲清爽"
            }),
        )
        .render()
}

fn explore_items(count: u32) -> String {
    PromptDocument::new("你是一位顶尖的时尚顾问和潮流趋势预测师。")
        .line("需要的数量", Some(count.to_string()))
        .instruction("请推荐当前流行或值得探索的时尚单品、风格、搭配概念或独特元素。")
        .instruction("每一项包含 name（中文，3到7个字）和 description（中文，1到2句话）。")
        .instruction("内容要多样，涵盖服装、配饰、特定风格和时尚概念。")
        .json_output(
            &["items"],
            json!({
                "items": [
                    {
                        "name": "复古奶奶开衫",
                        "description": "柔软的针织开衫带有复古图案，轻松打造温柔怀旧的造型。"
                    }
                ]
            }),
        )
        .render()
}

fn exploration_outfit(request: &ExploreOutfitRequest, creativity: CreativityLevel) -> String {
    let document = PromptDocument::new(
        "你是一位富有创意的AI时尚造型师，请围绕用户选择的探索性单品推荐一套完整、时尚的搭配。",
    );
    persona_lines(document, &request.persona)
        .line("探索性单品", Some(join_items(&request.selected_items)))
        .line("用户心情", Some(&request.mood))
        .line("天气状况", Some(&request.weather))
        .line("创意程度", Some(creativity_line(creativity)))
        .instruction("请根据创意程度调整搭配的独特性和前卫程度。")
        .instruction("description 用自然流畅的中文详细描述这套搭配、搭配理由以及适合的场合。")
        .instruction(CAPTION_RULE)
        .json_output(
            &["description", "imagePromptDetails"],
            json!({
                "description": "以解构主义牛仔裤为核心，搭配简洁的黑色上衣，个性又利落。",
                "imagePromptDetails": "一条不对称剪裁的浅蓝色解构牛仔裤，搭配黑色修身针织上衣和银色金属耳环，整体风格前卫都市"
            }),
        )
        .render()
}

fn outfit_image(outfit_description: &str, model: Option<&Persona>) -> String {
    let mut wearer = String::from("一位");
    if let Some(gender) = model.and_then(Persona::gender_text) {
        wearer.push_str(gender);
    }
    wearer.push_str("模特");

    if let Some(persona) = model {
        if let Some(age) = persona.age() {
            wearer.push_str(&format!("，年龄约{}岁", age));
        }
        if let Some(skin_tone) = persona.skin_tone_text() {
            wearer.push_str(&format!("，肤色{}", skin_tone));
        }
        if let Some(height) = persona.height_cm() {
            wearer.push_str(&format!("，身高约{}厘米", height));
        }
        if let Some(weight) = persona.weight_kg() {
            wearer.push_str(&format!("，体重约{}公斤", weight));
        }
    }

    format!(
        "{}，穿着：{}。时尚风格，照片级真实感，全身或半身像，背景简洁。",
        wearer,
        outfit_description.trim()
    )
}

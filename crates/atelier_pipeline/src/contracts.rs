//! Field contracts for each text-model stage.

use atelier_extraction::{Contract, FieldSpec, FieldType};

/// `{ attributes: string[] }`
pub const ATTRIBUTES: Contract = Contract::new(
    "identify_attributes",
    &[FieldSpec::required(
        "attributes",
        FieldType::Array(&FieldType::String),
    )],
);

/// `{ name: string }`
pub const CLOTHING_NAME: Contract = Contract::new(
    "generate_name",
    &[FieldSpec::required("name", FieldType::String)],
);

/// `{ recommendedOutfit: string, imagePromptDetails?: string }`
pub const RECOMMENDATION: Contract = Contract::new(
    "recommend_from_closet",
    &[
        FieldSpec::required("recommendedOutfit", FieldType::String),
        FieldSpec::optional("imagePromptDetails", FieldType::String),
    ],
);

const EXPLORABLE_ITEM: &[FieldSpec] = &[
    FieldSpec::required("name", FieldType::String),
    FieldSpec::required("description", FieldType::String),
];

/// `{ items: { name: string, description: string }[] }`
pub const EXPLORE_ITEMS: Contract = Contract::new(
    "explore_items",
    &[FieldSpec::required(
        "items",
        FieldType::Array(&FieldType::Object(EXPLORABLE_ITEM)),
    )],
);

/// `{ description: string, imagePromptDetails: string }`
pub const NEW_OUTFIT: Contract = Contract::new(
    "recommend_from_exploration",
    &[
        FieldSpec::required("description", FieldType::String),
        FieldSpec::required("imagePromptDetails", FieldType::String),
    ],
);

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum GarmentCategory {
    Tops,
    Bottoms,
    Dresses,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GarmentPreset {
    pub id: String,
    pub name: String,
    pub category: GarmentCategory,
    pub image_url: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackgroundPreset {
    pub id: String,
    pub name: String,
    pub prompt: String,
    pub thumbnail: String,
}

pub static GARMENT_PRESETS: Lazy<Vec<GarmentPreset>> = Lazy::new(|| {
    vec![
        GarmentPreset {
            id: "1".into(),
            name: "Minimalist White T-Shirt".into(),
            category: GarmentCategory::Tops,
            image_url:
                "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?auto=format&fit=crop&q=80&w=400"
                    .into(),
            description: "Breathable pure cotton, simple without being plain.".into(),
        },
        GarmentPreset {
            id: "2".into(),
            name: "Vintage Denim Jacket".into(),
            category: GarmentCategory::Tops,
            image_url:
                "https://images.unsplash.com/photo-1576995853123-5a10305d93c0?auto=format&fit=crop&q=80&w=400"
                    .into(),
            description: "Classic washed tone with a structured fit.".into(),
        },
        GarmentPreset {
            id: "3".into(),
            name: "Bohemian Maxi Dress".into(),
            category: GarmentCategory::Dresses,
            image_url:
                "https://images.unsplash.com/photo-1515372039744-b8f02a3ae446?auto=format&fit=crop&q=80&w=400"
                    .into(),
            description: "Light and flowing, effortlessly romantic.".into(),
        },
        GarmentPreset {
            id: "4".into(),
            name: "Navy Business Suit".into(),
            category: GarmentCategory::Tops,
            image_url:
                "https://images.unsplash.com/photo-1594932224828-b4b059b6f6f9?auto=format&fit=crop&q=80&w=400"
                    .into(),
            description: "Tailored cut for a sharp professional look.".into(),
        },
    ]
});

pub static BACKGROUND_PRESETS: Lazy<Vec<BackgroundPreset>> = Lazy::new(|| {
    vec![
        BackgroundPreset {
            id: "none".into(),
            name: "Original Background".into(),
            prompt: "keep the original background unchanged".into(),
            thumbnail: "🖼️".into(),
        },
        BackgroundPreset {
            id: "studio".into(),
            name: "Minimal Studio".into(),
            prompt: "a modern minimal light-gray studio backdrop with soft lighting".into(),
            thumbnail: "📸".into(),
        },
        BackgroundPreset {
            id: "street".into(),
            name: "Urban Street".into(),
            prompt: "a textured modern city street, slightly out of focus".into(),
            thumbnail: "🏙️".into(),
        },
        BackgroundPreset {
            id: "nature".into(),
            name: "Forest Meadow".into(),
            prompt: "a sunlit forest meadow with natural light and shadow".into(),
            thumbnail: "🍃".into(),
        },
        BackgroundPreset {
            id: "office".into(),
            name: "Modern Office".into(),
            prompt: "a bright modern office or business-center interior".into(),
            thumbnail: "💼".into(),
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_tables_are_complete() {
        assert_eq!(GARMENT_PRESETS.len(), 4);
        assert_eq!(BACKGROUND_PRESETS.len(), 5);
        assert_eq!(BACKGROUND_PRESETS[0].id, "none");
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&GarmentCategory::Dresses).unwrap();
        assert_eq!(json, "\"dresses\"");
    }
}

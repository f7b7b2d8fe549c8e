use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogoPosition {
    #[default]
    Left,
    Center,
    Right,
}

/// The single site-wide settings record. Older stored records missing a field
/// pick it up from the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    pub site_name: String,
    pub slogan: String,
    pub description: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub facebook_url: String,
    pub instagram_url: String,
    pub youtube_url: String,
    pub tiktok_url: String,
    /// Empty, an http(s) URL, or a `data:` URI holding the uploaded image.
    pub logo_url: String,
    pub logo_size: u32,
    pub logo_position: LogoPosition,
    pub footer_logo_position: LogoPosition,
    pub header_height: u32,
    pub stripe_public_key: String,
    pub stripe_enabled: bool,
    pub paypal_email: String,
    pub paypal_enabled: bool,
    pub orange_money_number: String,
    pub orange_money_enabled: bool,
    pub wave_number: String,
    pub wave_enabled: bool,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            site_name: "Xalima".to_string(),
            slogan: "L'éducation pour tous".to_string(),
            description: "Association dédiée à l'éducation et au développement durable"
                .to_string(),
            email: "contact@xalima.org".to_string(),
            phone: "+221 XX XXX XX XX".to_string(),
            address: "Dakar, Sénégal".to_string(),
            facebook_url: "https://facebook.com/xalima".to_string(),
            instagram_url: "https://instagram.com/xalima".to_string(),
            youtube_url: "https://youtube.com/@xalima".to_string(),
            tiktok_url: "https://tiktok.com/@xalima".to_string(),
            logo_url: String::new(),
            logo_size: 48,
            logo_position: LogoPosition::Left,
            footer_logo_position: LogoPosition::Left,
            header_height: 80,
            stripe_public_key: String::new(),
            stripe_enabled: false,
            paypal_email: String::new(),
            paypal_enabled: false,
            orange_money_number: String::new(),
            orange_money_enabled: false,
            wave_number: String::new(),
            wave_enabled: false,
        }
    }
}

use crate::domain::ports::Submission;
use crate::domain::schema::{parse_object, Fields, Schema, ValidationErrors};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Public-site copy edited from the backoffice. Always replaced as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub hero_title: String,
    pub hero_subtitle: String,
    pub about_title: String,
    pub about_body: String,
    pub contact_email: String,
    pub contact_secondary_email: String,
    pub contact_phone: String,
    pub footer_company_name: String,
    pub footer_address_line1: String,
    pub footer_address_line2: String,
    pub footer_vat: String,
    pub footer_director: String,
    pub media_hero_image: String,
    pub media_about_image: String,
    pub media_logo_primary: String,
    pub media_logo_alt: String,
    pub selected_clients: Vec<ClientReference>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientReference {
    pub name: String,
    pub location: String,
}

impl ClientReference {
    pub fn new(name: &str, location: &str) -> Self {
        Self {
            name: name.to_string(),
            location: location.to_string(),
        }
    }

    fn read(fields: &mut Fields<'_>) -> Self {
        Self {
            name: fields.string("name", 2),
            location: fields.string("location", 2),
        }
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            hero_title: "Il nostro team. Il tuo stile.".to_string(),
            hero_subtitle: "Direzione di sala e servizio premium per catering di alto livello"
                .to_string(),
            about_title: "Due decenni di eccellenza nel servizio di sala".to_string(),
            about_body: "Con sede a Modena, G3 ha costruito oltre vent'anni di esperienza nel \
                settore del catering, con un servizio strutturato, elegante e affidabile."
                .to_string(),
            contact_email: "info@g3modena.com".to_string(),
            contact_secondary_email: "mediterraneo@g3modena.com".to_string(),
            contact_phone: "+39 349 1767260".to_string(),
            footer_company_name: "G3 Servizio & Esperienza per LA VELA SRL".to_string(),
            footer_address_line1: "Viale dell'Industria 23/A".to_string(),
            footer_address_line2: "35129 Padova".to_string(),
            footer_vat: "P. IVA / Codice Fiscale: 05640030283".to_string(),
            footer_director: "Lino Salemme — Amministratore unico".to_string(),
            media_hero_image: "/images/hero.jpg".to_string(),
            media_about_image: "/images/about.jpg".to_string(),
            media_logo_primary: "G3".to_string(),
            media_logo_alt: "Servizio & Esperienza".to_string(),
            selected_clients: vec![
                ClientReference::new("Massimo Bottura", "Casa Maria Luigia, Modena"),
                ClientReference::new("Domenico Stile", "Enoteca La Torre, Roma"),
                ClientReference::new("Alajmo Group", "Padova"),
                ClientReference::new("ALMA", "Scuola Int. di Cucina Italiana, Parma"),
                ClientReference::new("Zerobriciole", "Milano"),
                ClientReference::new("Viola Morlino", "Milano"),
                ClientReference::new("Roots", "Modena"),
                ClientReference::new("AKitchen", "Sassari"),
                ClientReference::new("Tavola della Signoria", "Bologna"),
            ],
        }
    }
}

impl Schema for SiteContent {
    fn parse(value: &Value) -> Result<Self, ValidationErrors> {
        parse_object(value, |f| SiteContent {
            hero_title: f.string("heroTitle", 3),
            hero_subtitle: f.string("heroSubtitle", 3),
            about_title: f.string("aboutTitle", 3),
            about_body: f.string("aboutBody", 10),
            contact_email: f.email("contactEmail"),
            contact_secondary_email: f.email("contactSecondaryEmail"),
            contact_phone: f.string("contactPhone", 6),
            footer_company_name: f.string("footerCompanyName", 3),
            footer_address_line1: f.string("footerAddressLine1", 3),
            footer_address_line2: f.string("footerAddressLine2", 3),
            footer_vat: f.string("footerVat", 3),
            footer_director: f.string("footerDirector", 3),
            media_hero_image: f.string("mediaHeroImage", 3),
            media_about_image: f.string("mediaAboutImage", 3),
            media_logo_primary: f.string("mediaLogoPrimary", 1),
            media_logo_alt: f.string("mediaLogoAlt", 1),
            selected_clients: f.list("selectedClients", ClientReference::read),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmissionInput {
    pub full_name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub message: String,
}

impl ContactSubmissionInput {
    fn read(f: &mut Fields<'_>) -> Self {
        Self {
            full_name: f.string("fullName", 2),
            company: f.optional_string("company"),
            email: f.email("email"),
            phone: f.string("phone", 6),
            city: f.optional_string("city"),
            message: f.string("message", 2),
        }
    }
}

impl Schema for ContactSubmissionInput {
    fn parse(value: &Value) -> Result<Self, ValidationErrors> {
        parse_object(value, Self::read)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub id: String,
    #[serde(flatten)]
    pub details: ContactSubmissionInput,
    #[serde(with = "iso8601")]
    pub created_at: DateTime<Utc>,
}

/// Fixture records carry their own id and timestamp.
impl ContactSubmission {
    pub(crate) fn read(f: &mut Fields<'_>) -> Self {
        Self {
            id: f.string("id", 1),
            details: ContactSubmissionInput::read(f),
            created_at: f.timestamp("createdAt"),
        }
    }
}

impl Schema for ContactSubmission {
    fn parse(value: &Value) -> Result<Self, ValidationErrors> {
        parse_object(value, Self::read)
    }
}

impl Submission for ContactSubmission {
    type Input = ContactSubmissionInput;
    const KIND: &'static str = "contact";

    fn from_input(input: Self::Input, id: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            details: input,
            created_at,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.details.full_name.as_str(),
            self.details.email.as_str(),
            self.details.phone.as_str(),
            self.details.company.as_str(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerSubmissionInput {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub city: String,
    pub availability: String,
    pub profile_photo_file_name: String,
    /// `data:` URL with the embedded image.
    pub profile_photo_data_url: String,
    pub cv_file_name: String,
    pub cv_preview_url: String,
    pub message: String,
}

impl CareerSubmissionInput {
    fn read(f: &mut Fields<'_>) -> Self {
        Self {
            full_name: f.string("fullName", 2),
            email: f.email("email"),
            phone: f.string("phone", 6),
            age: f.string("age", 1),
            city: f.optional_string("city"),
            availability: f.string("availability", 1),
            profile_photo_file_name: f.optional_string("profilePhotoFileName"),
            profile_photo_data_url: f.string("profilePhotoDataUrl", 1),
            cv_file_name: f.optional_string("cvFileName"),
            cv_preview_url: f.optional_string("cvPreviewUrl"),
            message: f.optional_string("message"),
        }
    }
}

impl Schema for CareerSubmissionInput {
    fn parse(value: &Value) -> Result<Self, ValidationErrors> {
        parse_object(value, Self::read)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerSubmission {
    pub id: String,
    #[serde(flatten)]
    pub details: CareerSubmissionInput,
    #[serde(with = "iso8601")]
    pub created_at: DateTime<Utc>,
}

impl CareerSubmission {
    pub(crate) fn read(f: &mut Fields<'_>) -> Self {
        Self {
            id: f.string("id", 1),
            details: CareerSubmissionInput::read(f),
            created_at: f.timestamp("createdAt"),
        }
    }
}

impl Schema for CareerSubmission {
    fn parse(value: &Value) -> Result<Self, ValidationErrors> {
        parse_object(value, Self::read)
    }
}

impl Submission for CareerSubmission {
    type Input = CareerSubmissionInput;
    const KIND: &'static str = "career";

    fn from_input(input: Self::Input, id: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            details: input,
            created_at,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.details.full_name.as_str(),
            self.details.email.as_str(),
            self.details.phone.as_str(),
        ]
    }
}

/// `2026-01-15T09:30:00.000Z`, the shape browsers produce with `toISOString()`.
pub mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn format(value: &DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::Rule;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_default_content_passes_its_own_schema() {
        let wire = serde_json::to_value(SiteContent::default()).unwrap();
        let parsed = SiteContent::parse(&wire).unwrap();
        assert_eq!(parsed, SiteContent::default());
    }

    #[test]
    fn test_content_wire_names_are_camel_case() {
        let wire = serde_json::to_value(SiteContent::default()).unwrap();
        assert!(wire.get("footerAddressLine1").is_some());
        assert!(wire.get("contactSecondaryEmail").is_some());
        assert_eq!(wire["selectedClients"][0]["name"], "Massimo Bottura");
    }

    #[test]
    fn test_content_requires_every_field() {
        let errors = SiteContent::parse(&json!({})).unwrap_err();
        for field in [
            "heroTitle",
            "heroSubtitle",
            "aboutTitle",
            "aboutBody",
            "contactEmail",
            "contactSecondaryEmail",
            "contactPhone",
            "footerCompanyName",
            "footerAddressLine1",
            "footerAddressLine2",
            "footerVat",
            "footerDirector",
            "mediaHeroImage",
            "mediaAboutImage",
            "mediaLogoPrimary",
            "mediaLogoAlt",
            "selectedClients",
        ] {
            assert_eq!(errors.rules_for(field), &[Rule::Required], "{field}");
        }
    }

    #[test]
    fn test_content_client_entries_are_validated() {
        let mut wire = serde_json::to_value(SiteContent::default()).unwrap();
        wire["selectedClients"] = json!([{"name": "R", "location": "Modena"}]);
        wire["contactEmail"] = json!("info-at-g3");

        let errors = SiteContent::parse(&wire).unwrap_err();
        assert_eq!(errors.rules_for("selectedClients.0.name"), &[Rule::MinLength(2)]);
        assert_eq!(errors.rules_for("contactEmail"), &[Rule::Email]);
    }

    #[test]
    fn test_contact_input_defaults_optional_fields() {
        let input = ContactSubmissionInput::parse(&json!({
            "fullName": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "123456",
            "message": "Interested in catering for 50 guests"
        }))
        .unwrap();

        assert_eq!(input.company, "");
        assert_eq!(input.city, "");
    }

    #[test]
    fn test_career_input_rules() {
        let errors = CareerSubmissionInput::parse(&json!({
            "fullName": "Bea",
            "email": "bea@example.com",
            "phone": "12345",
            "age": "",
            "availability": "Weekend"
        }))
        .unwrap_err();

        assert_eq!(errors.rules_for("phone"), &[Rule::MinLength(6)]);
        assert_eq!(errors.rules_for("age"), &[Rule::MinLength(1)]);
        assert_eq!(errors.rules_for("profilePhotoDataUrl"), &[Rule::Required]);
        assert!(!errors.has_field("cvFileName"));
        assert!(!errors.has_field("message"));
    }

    #[test]
    fn test_record_serializes_flat_with_millisecond_timestamp() {
        let record = ContactSubmission::from_input(
            ContactSubmissionInput {
                full_name: "Ada Lovelace".to_string(),
                company: String::new(),
                email: "ada@example.com".to_string(),
                phone: "123456".to_string(),
                city: String::new(),
                message: "Hello".to_string(),
            },
            "c-1".to_string(),
            Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap(),
        );

        let wire = serde_json::to_value(&record).unwrap();
        assert_eq!(wire["id"], "c-1");
        assert_eq!(wire["fullName"], "Ada Lovelace");
        assert_eq!(wire["createdAt"], "2026-01-15T09:30:00.000Z");
        assert!(wire.get("details").is_none());
    }

    #[test]
    fn test_fixture_record_requires_id_and_timestamp() {
        let errors = CareerSubmission::parse(&json!({
            "id": "",
            "fullName": "Bea Rossi",
            "email": "bea@example.com",
            "phone": "3331234567",
            "age": "24",
            "availability": "Weekend",
            "profilePhotoDataUrl": "data:image/png;base64,AAAA",
            "createdAt": "yesterday"
        }))
        .unwrap_err();

        assert_eq!(errors.rules_for("id"), &[Rule::MinLength(1)]);
        assert_eq!(errors.rules_for("createdAt"), &[Rule::InvalidTimestamp]);
    }

    #[test]
    fn test_default_footer_director() {
        assert_eq!(
            SiteContent::default().footer_director,
            "Lino Salemme — Amministratore unico"
        );
    }

    #[test]
    fn test_emoji_name_meets_two_unit_minimum() {
        let input = ContactSubmissionInput::parse(&json!({
            "fullName": "\u{1F600}",
            "email": "ada@example.com",
            "phone": "123456",
            "message": "Interested in catering for 50 guests"
        }))
        .unwrap();
        assert_eq!(input.full_name, "\u{1F600}");
    }
}

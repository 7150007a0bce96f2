//! Closed enumerations mirrored from `LanguageSourceData`
//!
//! Every enumeration is stored as a small integer in the dump. Conversions are
//! explicit and named: `from_value` / `value` for the integer encoding,
//! `parse_by_name` / `name` for the human-readable side. Out-of-range integers
//! are reported by the mapper as content errors, never defaulted.

use std::fmt;

/// Kind of asset a term localizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermType {
    Text,
    Font,
    Texture,
    AudioClip,
    GameObject,
    Sprite,
    Material,
    Child,
    Mesh,
    Object,
    Video,
}

impl TermType {
    /// Decode the dump integer.
    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Text),
            1 => Some(Self::Font),
            2 => Some(Self::Texture),
            3 => Some(Self::AudioClip),
            4 => Some(Self::GameObject),
            5 => Some(Self::Sprite),
            6 => Some(Self::Material),
            7 => Some(Self::Child),
            8 => Some(Self::Mesh),
            9 => Some(Self::Object),
            10 => Some(Self::Video),
            _ => None,
        }
    }

    /// The integer encoding used by the dump.
    #[must_use]
    pub fn value(self) -> i64 {
        match self {
            Self::Text => 0,
            Self::Font => 1,
            Self::Texture => 2,
            Self::AudioClip => 3,
            Self::GameObject => 4,
            Self::Sprite => 5,
            Self::Material => 6,
            Self::Child => 7,
            Self::Mesh => 8,
            Self::Object => 9,
            Self::Video => 10,
        }
    }

    /// Parse a display name; case-insensitive, spaces and underscores both accepted.
    pub fn parse_by_name(name: &str) -> Option<Self> {
        match normalized(name).as_str() {
            "TEXT" => Some(Self::Text),
            "FONT" => Some(Self::Font),
            "TEXTURE" => Some(Self::Texture),
            "AUDIO_CLIP" | "AUDIOCLIP" => Some(Self::AudioClip),
            "GAME_OBJECT" | "GAMEOBJECT" => Some(Self::GameObject),
            "SPRITE" => Some(Self::Sprite),
            "MATERIAL" => Some(Self::Material),
            "CHILD" => Some(Self::Child),
            "MESH" => Some(Self::Mesh),
            "OBJECT" => Some(Self::Object),
            "VIDEO" => Some(Self::Video),
            _ => None,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Font => "Font",
            Self::Texture => "Texture",
            Self::AudioClip => "Audio Clip",
            Self::GameObject => "Game Object",
            Self::Sprite => "Sprite",
            Self::Material => "Material",
            Self::Child => "Child",
            Self::Mesh => "Mesh",
            Self::Object => "Object",
            Self::Video => "Video",
        }
    }
}

impl fmt::Display for TermType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-language enabled/disabled flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageDataFlags {
    Enabled,
    Disabled,
}

impl LanguageDataFlags {
    /// Decode the dump integer.
    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Enabled),
            1 => Some(Self::Disabled),
            _ => None,
        }
    }

    /// The integer encoding used by the dump.
    #[must_use]
    pub fn value(self) -> i64 {
        match self {
            Self::Enabled => 0,
            Self::Disabled => 1,
        }
    }

    /// Parse a display name; case-insensitive.
    pub fn parse_by_name(name: &str) -> Option<Self> {
        match normalized(name).as_str() {
            "ENABLED" => Some(Self::Enabled),
            "DISABLED" => Some(Self::Disabled),
            _ => None,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Enabled => "Enabled",
            Self::Disabled => "Disabled",
        }
    }
}

impl fmt::Display for LanguageDataFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What I2 shows at runtime when a translation is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingTranslationAction {
    Empty,
    Fallback,
    ShowWarning,
    ShowTerm,
}

impl MissingTranslationAction {
    /// Decode the dump integer.
    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Empty),
            1 => Some(Self::Fallback),
            2 => Some(Self::ShowWarning),
            3 => Some(Self::ShowTerm),
            _ => None,
        }
    }

    /// The integer encoding used by the dump.
    #[must_use]
    pub fn value(self) -> i64 {
        match self {
            Self::Empty => 0,
            Self::Fallback => 1,
            Self::ShowWarning => 2,
            Self::ShowTerm => 3,
        }
    }

    /// Parse a display name; case-insensitive, spaces and underscores both accepted.
    pub fn parse_by_name(name: &str) -> Option<Self> {
        match normalized(name).as_str() {
            "EMPTY" => Some(Self::Empty),
            "FALLBACK" => Some(Self::Fallback),
            "SHOW_WARNING" | "SHOWWARNING" => Some(Self::ShowWarning),
            "SHOW_TERM" | "SHOWTERM" => Some(Self::ShowTerm),
            _ => None,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::Fallback => "Fallback",
            Self::ShowWarning => "Show Warning",
            Self::ShowTerm => "Show Term",
        }
    }
}

impl fmt::Display for MissingTranslationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// When I2 may unload language data to save memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowUnloadLanguages {
    Never,
    OnlyInDevice,
    EditorAndDevice,
}

impl AllowUnloadLanguages {
    /// Decode the dump integer.
    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Never),
            1 => Some(Self::OnlyInDevice),
            2 => Some(Self::EditorAndDevice),
            _ => None,
        }
    }

    /// The integer encoding used by the dump.
    #[must_use]
    pub fn value(self) -> i64 {
        match self {
            Self::Never => 0,
            Self::OnlyInDevice => 1,
            Self::EditorAndDevice => 2,
        }
    }

    /// Parse a display name; case-insensitive, spaces and underscores both accepted.
    pub fn parse_by_name(name: &str) -> Option<Self> {
        match normalized(name).as_str() {
            "NEVER" => Some(Self::Never),
            "ONLY_IN_DEVICE" | "ONLYINDEVICE" => Some(Self::OnlyInDevice),
            "EDITOR_AND_DEVICE" | "EDITORANDDEVICE" => Some(Self::EditorAndDevice),
            _ => None,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Never => "Never",
            Self::OnlyInDevice => "Only In Device",
            Self::EditorAndDevice => "Editor And Device",
        }
    }
}

impl fmt::Display for AllowUnloadLanguages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How often I2 polls Google Sheets for updated translations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoogleUpdateFrequency {
    Always,
    Never,
    Daily,
    Weekly,
    Monthly,
    OnlyOnce,
    EveryOtherDay,
}

impl GoogleUpdateFrequency {
    /// Decode the dump integer.
    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Always),
            1 => Some(Self::Never),
            2 => Some(Self::Daily),
            3 => Some(Self::Weekly),
            4 => Some(Self::Monthly),
            5 => Some(Self::OnlyOnce),
            6 => Some(Self::EveryOtherDay),
            _ => None,
        }
    }

    /// The integer encoding used by the dump.
    #[must_use]
    pub fn value(self) -> i64 {
        match self {
            Self::Always => 0,
            Self::Never => 1,
            Self::Daily => 2,
            Self::Weekly => 3,
            Self::Monthly => 4,
            Self::OnlyOnce => 5,
            Self::EveryOtherDay => 6,
        }
    }

    /// Parse a display name; case-insensitive, spaces and underscores both accepted.
    pub fn parse_by_name(name: &str) -> Option<Self> {
        match normalized(name).as_str() {
            "ALWAYS" => Some(Self::Always),
            "NEVER" => Some(Self::Never),
            "DAILY" => Some(Self::Daily),
            "WEEKLY" => Some(Self::Weekly),
            "MONTHLY" => Some(Self::Monthly),
            "ONLY_ONCE" | "ONLYONCE" => Some(Self::OnlyOnce),
            "EVERY_OTHER_DAY" | "EVERYOTHERDAY" => Some(Self::EveryOtherDay),
            _ => None,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Always => "Always",
            Self::Never => "Never",
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::OnlyOnce => "Only Once",
            Self::EveryOtherDay => "Every Other Day",
        }
    }
}

impl fmt::Display for GoogleUpdateFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// When freshly downloaded Google Sheets data is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoogleUpdateSynchronization {
    Manual,
    OnSceneLoaded,
    AsSoonAsDownloaded,
}

impl GoogleUpdateSynchronization {
    /// Decode the dump integer.
    pub fn from_value(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Manual),
            1 => Some(Self::OnSceneLoaded),
            2 => Some(Self::AsSoonAsDownloaded),
            _ => None,
        }
    }

    /// The integer encoding used by the dump.
    #[must_use]
    pub fn value(self) -> i64 {
        match self {
            Self::Manual => 0,
            Self::OnSceneLoaded => 1,
            Self::AsSoonAsDownloaded => 2,
        }
    }

    /// Parse a display name; case-insensitive, spaces and underscores both accepted.
    pub fn parse_by_name(name: &str) -> Option<Self> {
        match normalized(name).as_str() {
            "MANUAL" => Some(Self::Manual),
            "ON_SCENE_LOADED" | "ONSCENELOADED" => Some(Self::OnSceneLoaded),
            "AS_SOON_AS_DOWNLOADED" | "ASSOONASDOWNLOADED" => Some(Self::AsSoonAsDownloaded),
            _ => None,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Manual => "Manual",
            Self::OnSceneLoaded => "On Scene Loaded",
            Self::AsSoonAsDownloaded => "As Soon As Downloaded",
        }
    }
}

impl fmt::Display for GoogleUpdateSynchronization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Uppercase, with spaces folded to underscores, so `"Audio Clip"`, `"audio_clip"`
/// and `"AudioClip"` all resolve.
fn normalized(name: &str) -> String {
    name.trim().replace(' ', "_").to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_type_round_trip() {
        for value in 0..=10 {
            let ty = TermType::from_value(value).unwrap();
            assert_eq!(ty.value(), value);
        }
        assert_eq!(TermType::from_value(11), None);
        assert_eq!(TermType::from_value(-1), None);
    }

    #[test]
    fn test_parse_by_name_variants() {
        assert_eq!(TermType::parse_by_name("Audio Clip"), Some(TermType::AudioClip));
        assert_eq!(TermType::parse_by_name("audio_clip"), Some(TermType::AudioClip));
        assert_eq!(TermType::parse_by_name("AudioClip"), Some(TermType::AudioClip));
        assert_eq!(TermType::parse_by_name("nonsense"), None);
        assert_eq!(
            GoogleUpdateFrequency::parse_by_name("every other day"),
            Some(GoogleUpdateFrequency::EveryOtherDay)
        );
    }

    #[test]
    fn test_enum_values_match_dump_encoding() {
        assert_eq!(MissingTranslationAction::ShowTerm.value(), 3);
        assert_eq!(AllowUnloadLanguages::EditorAndDevice.value(), 2);
        assert_eq!(GoogleUpdateSynchronization::AsSoonAsDownloaded.value(), 2);
        assert_eq!(LanguageDataFlags::Disabled.value(), 1);
    }
}

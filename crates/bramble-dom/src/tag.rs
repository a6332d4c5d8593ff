//! Known HTML tag names.
//!
//! The set mirrors the tag table of a conventional HTML5 tree builder:
//! the current HTML elements, the MathML and SVG integration points, and the
//! obsolete elements a parser still has to recognize. Anything else is kept
//! as [`Tag::Unknown`] together with its original text.

use std::fmt;
use std::str::FromStr;

use strum_macros::{EnumString, IntoStaticStr};

/// Tag identity of an element.
///
/// Known tags compare by variant. Unknown tags compare by their exact
/// original text.
// Variant names are the tag names themselves.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Tag {
    Html,
    Head,
    Title,
    Base,
    Link,
    Meta,
    Style,
    Script,
    Noscript,
    Template,
    Body,
    Article,
    Section,
    Nav,
    Aside,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Hgroup,
    Header,
    Footer,
    Address,
    P,
    Hr,
    Pre,
    Blockquote,
    Ol,
    Ul,
    Li,
    Dl,
    Dt,
    Dd,
    Figure,
    Figcaption,
    Main,
    Div,
    A,
    Em,
    Strong,
    Small,
    S,
    Cite,
    Q,
    Dfn,
    Abbr,
    Data,
    Time,
    Code,
    Var,
    Samp,
    Kbd,
    Sub,
    Sup,
    I,
    B,
    U,
    Mark,
    Ruby,
    Rt,
    Rp,
    Bdi,
    Bdo,
    Span,
    Br,
    Wbr,
    Ins,
    Del,
    Image,
    Img,
    Iframe,
    Embed,
    Object,
    Param,
    Video,
    Audio,
    Source,
    Track,
    Canvas,
    Map,
    Area,
    Math,
    Mi,
    Mo,
    Mn,
    Ms,
    Mtext,
    Mglyph,
    Malignmark,
    #[strum(serialize = "annotation-xml")]
    AnnotationXml,
    Svg,
    Foreignobject,
    Desc,
    Table,
    Caption,
    Colgroup,
    Col,
    Tbody,
    Thead,
    Tfoot,
    Tr,
    Td,
    Th,
    Form,
    Fieldset,
    Legend,
    Label,
    Input,
    Button,
    Select,
    Datalist,
    Optgroup,
    Option,
    Textarea,
    Keygen,
    Output,
    Progress,
    Meter,
    Details,
    Summary,
    Menu,
    Menuitem,
    Applet,
    Acronym,
    Bgsound,
    Dir,
    Frame,
    Frameset,
    Noframes,
    Isindex,
    Listing,
    Xmp,
    Nextid,
    Noembed,
    Plaintext,
    Rb,
    Strike,
    Basefont,
    Big,
    Blink,
    Center,
    Font,
    Marquee,
    Multicol,
    Nobr,
    Spacer,
    Tt,
    Rtc,
    /// A tag outside the known set, carrying its original text.
    #[strum(default)]
    Unknown(String),
}

impl Tag {
    /// Resolve a tag name.
    ///
    /// Known names match ASCII case-insensitively. Any other name becomes
    /// [`Tag::Unknown`] holding `name` verbatim.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::from_str(name).unwrap_or_else(|_| Self::Unknown(name.to_string()))
    }

    /// The canonical lowercase name, or the original text of an unknown tag.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Unknown(text) => text.as_str(),
            known => <&'static str>::from(known),
        }
    }

    /// Returns `true` for tags outside the known set.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

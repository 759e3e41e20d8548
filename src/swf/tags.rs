pub const END: u16 = 0;
pub const SHOW_FRAME: u16 = 1;
pub const DEFINE_SHAPE: u16 = 2;
pub const PLACE_OBJECT: u16 = 4;
pub const REMOVE_OBJECT: u16 = 5;
pub const SET_BACKGROUND_COLOR: u16 = 9;
pub const DO_ACTION: u16 = 12;
pub const PLACE_OBJECT2: u16 = 26;
pub const REMOVE_OBJECT2: u16 = 28;
pub const DEFINE_SPRITE: u16 = 39;
pub const FRAME_LABEL: u16 = 43;
pub const SOUND_STREAM_HEAD2: u16 = 45;
pub const FILE_ATTRIBUTES: u16 = 69;
pub const PLACE_OBJECT3: u16 = 70;
pub const DEFINE_FONT_ALIGN_ZONES: u16 = 73;
pub const CSM_TEXT_SETTINGS: u16 = 74;
pub const DEFINE_FONT3: u16 = 75;
pub const SYMBOL_CLASS: u16 = 76;
pub const DO_ABC: u16 = 82;
pub const DEFINE_SHAPE4: u16 = 83;

/// FileAttributes flag bits
pub mod file_attributes {
    pub const USE_NETWORK: u32 = 1 << 0;
    /// ActionScript 3 / AVM2
    pub const ACTION_SCRIPT3: u32 = 1 << 3;
    pub const HAS_METADATA: u32 = 1 << 4;
}

/// Display name for a tag code, `"?"` for codes outside the common set.
pub fn tag_name(code: u16) -> &'static str {
    match code {
        END => "End",
        SHOW_FRAME => "ShowFrame",
        DEFINE_SHAPE => "DefineShape",
        PLACE_OBJECT => "PlaceObject",
        REMOVE_OBJECT => "RemoveObject",
        SET_BACKGROUND_COLOR => "SetBackgroundColor",
        DO_ACTION => "DoAction",
        PLACE_OBJECT2 => "PlaceObject2",
        REMOVE_OBJECT2 => "RemoveObject2",
        DEFINE_SPRITE => "DefineSprite",
        FRAME_LABEL => "FrameLabel",
        SOUND_STREAM_HEAD2 => "SoundStreamHead2",
        FILE_ATTRIBUTES => "FileAttributes",
        PLACE_OBJECT3 => "PlaceObject3",
        DEFINE_FONT_ALIGN_ZONES => "DefineFontAlignZones",
        CSM_TEXT_SETTINGS => "CSMTextSettings",
        DEFINE_FONT3 => "DefineFont3",
        SYMBOL_CLASS => "SymbolClass",
        DO_ABC => "DoABC",
        DEFINE_SHAPE4 => "DefineShape4",
        _ => "?",
    }
}

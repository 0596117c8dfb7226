// ── Scancode table ────────────────────────────────────────────────────────────
//
// Physical-key identifiers from the USB HID keyboard usage page (0x07), with
// the values SDL assigns above 256 for keys that arrive from other usage
// pages.  Layout- and locale-independent; no Win32/SDL imports; pure Rust.
//
// The table is defined at compile time and never constructed from native
// data without passing through `Scancode::from_repr`.

/// Array-sizing sentinel: one past the highest scancode SDL will ever report.
///
/// Not a key.  Use it to size lookup tables indexed by raw scancode.
pub const NUM_SCANCODES: i32 = 512;

/// A physical keyboard key position, independent of layout and locale.
///
/// Discriminants are the USB HID keyboard-page usage IDs (plus SDL's
/// extended values above 256), so `scancode as i32` round-trips through
/// [`Scancode::from_repr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum Scancode {
    Unknown = 0,

    // Letter keys
    A = 4,
    B = 5,
    C = 6,
    D = 7,
    E = 8,
    F = 9,
    G = 10,
    H = 11,
    I = 12,
    J = 13,
    K = 14,
    L = 15,
    M = 16,
    N = 17,
    O = 18,
    P = 19,
    Q = 20,
    R = 21,
    S = 22,
    T = 23,
    U = 24,
    V = 25,
    W = 26,
    X = 27,
    Y = 28,
    Z = 29,

    // Number row
    Num1 = 30,
    Num2 = 31,
    Num3 = 32,
    Num4 = 33,
    Num5 = 34,
    Num6 = 35,
    Num7 = 36,
    Num8 = 37,
    Num9 = 38,
    Num0 = 39,

    Return = 40,
    Escape = 41,
    Backspace = 42,
    Tab = 43,
    Space = 44,

    // Punctuation
    Minus = 45,
    Equals = 46,
    LeftBracket = 47,
    RightBracket = 48,
    Backslash = 49,
    /// ISO-layout hash/tilde key; reported identically to `Backslash` on
    /// many keyboards.
    NonUsHash = 50,
    Semicolon = 51,
    Apostrophe = 52,
    Grave = 53,
    Comma = 54,
    Period = 55,
    Slash = 56,

    CapsLock = 57,

    // Function keys
    F1 = 58,
    F2 = 59,
    F3 = 60,
    F4 = 61,
    F5 = 62,
    F6 = 63,
    F7 = 64,
    F8 = 65,
    F9 = 66,
    F10 = 67,
    F11 = 68,
    F12 = 69,

    // Navigation cluster
    PrintScreen = 70,
    ScrollLock = 71,
    Pause = 72,
    Insert = 73,
    Home = 74,
    PageUp = 75,
    Delete = 76,
    End = 77,
    PageDown = 78,
    Right = 79,
    Left = 80,
    Down = 81,
    Up = 82,

    // Keypad
    NumLockClear = 83,
    KeypadDivide = 84,
    KeypadMultiply = 85,
    KeypadMinus = 86,
    KeypadPlus = 87,
    KeypadEnter = 88,
    Keypad1 = 89,
    Keypad2 = 90,
    Keypad3 = 91,
    Keypad4 = 92,
    Keypad5 = 93,
    Keypad6 = 94,
    Keypad7 = 95,
    Keypad8 = 96,
    Keypad9 = 97,
    Keypad0 = 98,
    KeypadPeriod = 99,

    /// ISO-layout key between left shift and Z.
    NonUsBackslash = 100,
    Application = 101,
    Power = 102,
    KeypadEquals = 103,
    F13 = 104,
    F14 = 105,
    F15 = 106,
    F16 = 107,
    F17 = 108,
    F18 = 109,
    F19 = 110,
    F20 = 111,
    F21 = 112,
    F22 = 113,
    F23 = 114,
    F24 = 115,
    Execute = 116,
    Help = 117,
    Menu = 118,
    Select = 119,
    Stop = 120,
    Again = 121,
    Undo = 122,
    Cut = 123,
    Copy = 124,
    Paste = 125,
    Find = 126,
    Mute = 127,
    VolumeUp = 128,
    VolumeDown = 129,
    // 130–132 are the HID "locking" modifier keys; SDL leaves them unmapped.
    KeypadComma = 133,
    /// Equals key on AS/400 keyboards.
    KeypadEqualsAs400 = 134,

    // International and language keys (JIS and Korean layouts, mostly)
    International1 = 135,
    International2 = 136,
    International3 = 137,
    International4 = 138,
    International5 = 139,
    International6 = 140,
    International7 = 141,
    International8 = 142,
    International9 = 143,
    Lang1 = 144,
    Lang2 = 145,
    Lang3 = 146,
    Lang4 = 147,
    Lang5 = 148,
    Lang6 = 149,
    Lang7 = 150,
    Lang8 = 151,
    Lang9 = 152,

    AltErase = 153,
    SysReq = 154,
    Cancel = 155,
    Clear = 156,
    Prior = 157,
    Return2 = 158,
    Separator = 159,
    Out = 160,
    Oper = 161,
    ClearAgain = 162,
    CrSel = 163,
    ExSel = 164,

    // Extended keypad (terminal and calculator keyboards)
    Keypad00 = 176,
    Keypad000 = 177,
    ThousandsSeparator = 178,
    DecimalSeparator = 179,
    CurrencyUnit = 180,
    CurrencySubUnit = 181,
    KeypadLeftParen = 182,
    KeypadRightParen = 183,
    KeypadLeftBrace = 184,
    KeypadRightBrace = 185,
    KeypadTab = 186,
    KeypadBackspace = 187,
    KeypadA = 188,
    KeypadB = 189,
    KeypadC = 190,
    KeypadD = 191,
    KeypadE = 192,
    KeypadF = 193,
    KeypadXor = 194,
    KeypadPower = 195,
    KeypadPercent = 196,
    KeypadLess = 197,
    KeypadGreater = 198,
    KeypadAmpersand = 199,
    KeypadDblAmpersand = 200,
    KeypadVerticalBar = 201,
    KeypadDblVerticalBar = 202,
    KeypadColon = 203,
    KeypadHash = 204,
    KeypadSpace = 205,
    KeypadAt = 206,
    KeypadExclam = 207,
    KeypadMemStore = 208,
    KeypadMemRecall = 209,
    KeypadMemClear = 210,
    KeypadMemAdd = 211,
    KeypadMemSubtract = 212,
    KeypadMemMultiply = 213,
    KeypadMemDivide = 214,
    KeypadPlusMinus = 215,
    KeypadClear = 216,
    KeypadClearEntry = 217,
    KeypadBinary = 218,
    KeypadOctal = 219,
    KeypadDecimal = 220,
    KeypadHexadecimal = 221,

    // Modifiers
    LCtrl = 224,
    LShift = 225,
    LAlt = 226,
    LGui = 227,
    RCtrl = 228,
    RShift = 229,
    RAlt = 230,
    RGui = 231,

    /// AltGr / mode-switch key.
    Mode = 257,

    // USB consumer page (0x0C)
    AudioNext = 258,
    AudioPrev = 259,
    AudioStop = 260,
    AudioPlay = 261,
    AudioMute = 262,
    MediaSelect = 263,
    Www = 264,
    Mail = 265,
    Calculator = 266,
    Computer = 267,
    AcSearch = 268,
    AcHome = 269,
    AcBack = 270,
    AcForward = 271,
    AcStop = 272,
    AcRefresh = 273,
    AcBookmarks = 274,

    // Extra keys from other sources, mostly Mac laptops
    BrightnessDown = 275,
    BrightnessUp = 276,
    DisplaySwitch = 277,
    KbdIllumToggle = 278,
    KbdIllumDown = 279,
    KbdIllumUp = 280,
    Eject = 281,
    Sleep = 282,

    App1 = 283,
    App2 = 284,

    // USB consumer page (0x0C)
    AudioRewind = 285,
    AudioFastForward = 286,
}

impl Scancode {
    /// The raw scancode value, as the native event layer reports it.
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Map a raw scancode back to the enum.
    ///
    /// Returns `None` for every value with no defined key: the gaps inside
    /// the table (1–3, 130–132, 165–175, 222–223, 232–256), everything at or
    /// above 287, and negatives.
    pub fn from_repr(code: i32) -> Option<Scancode> {
        let sc = match code {
            0 => Self::Unknown,
            4 => Self::A,
            5 => Self::B,
            6 => Self::C,
            7 => Self::D,
            8 => Self::E,
            9 => Self::F,
            10 => Self::G,
            11 => Self::H,
            12 => Self::I,
            13 => Self::J,
            14 => Self::K,
            15 => Self::L,
            16 => Self::M,
            17 => Self::N,
            18 => Self::O,
            19 => Self::P,
            20 => Self::Q,
            21 => Self::R,
            22 => Self::S,
            23 => Self::T,
            24 => Self::U,
            25 => Self::V,
            26 => Self::W,
            27 => Self::X,
            28 => Self::Y,
            29 => Self::Z,
            30 => Self::Num1,
            31 => Self::Num2,
            32 => Self::Num3,
            33 => Self::Num4,
            34 => Self::Num5,
            35 => Self::Num6,
            36 => Self::Num7,
            37 => Self::Num8,
            38 => Self::Num9,
            39 => Self::Num0,
            40 => Self::Return,
            41 => Self::Escape,
            42 => Self::Backspace,
            43 => Self::Tab,
            44 => Self::Space,
            45 => Self::Minus,
            46 => Self::Equals,
            47 => Self::LeftBracket,
            48 => Self::RightBracket,
            49 => Self::Backslash,
            50 => Self::NonUsHash,
            51 => Self::Semicolon,
            52 => Self::Apostrophe,
            53 => Self::Grave,
            54 => Self::Comma,
            55 => Self::Period,
            56 => Self::Slash,
            57 => Self::CapsLock,
            58 => Self::F1,
            59 => Self::F2,
            60 => Self::F3,
            61 => Self::F4,
            62 => Self::F5,
            63 => Self::F6,
            64 => Self::F7,
            65 => Self::F8,
            66 => Self::F9,
            67 => Self::F10,
            68 => Self::F11,
            69 => Self::F12,
            70 => Self::PrintScreen,
            71 => Self::ScrollLock,
            72 => Self::Pause,
            73 => Self::Insert,
            74 => Self::Home,
            75 => Self::PageUp,
            76 => Self::Delete,
            77 => Self::End,
            78 => Self::PageDown,
            79 => Self::Right,
            80 => Self::Left,
            81 => Self::Down,
            82 => Self::Up,
            83 => Self::NumLockClear,
            84 => Self::KeypadDivide,
            85 => Self::KeypadMultiply,
            86 => Self::KeypadMinus,
            87 => Self::KeypadPlus,
            88 => Self::KeypadEnter,
            89 => Self::Keypad1,
            90 => Self::Keypad2,
            91 => Self::Keypad3,
            92 => Self::Keypad4,
            93 => Self::Keypad5,
            94 => Self::Keypad6,
            95 => Self::Keypad7,
            96 => Self::Keypad8,
            97 => Self::Keypad9,
            98 => Self::Keypad0,
            99 => Self::KeypadPeriod,
            100 => Self::NonUsBackslash,
            101 => Self::Application,
            102 => Self::Power,
            103 => Self::KeypadEquals,
            104 => Self::F13,
            105 => Self::F14,
            106 => Self::F15,
            107 => Self::F16,
            108 => Self::F17,
            109 => Self::F18,
            110 => Self::F19,
            111 => Self::F20,
            112 => Self::F21,
            113 => Self::F22,
            114 => Self::F23,
            115 => Self::F24,
            116 => Self::Execute,
            117 => Self::Help,
            118 => Self::Menu,
            119 => Self::Select,
            120 => Self::Stop,
            121 => Self::Again,
            122 => Self::Undo,
            123 => Self::Cut,
            124 => Self::Copy,
            125 => Self::Paste,
            126 => Self::Find,
            127 => Self::Mute,
            128 => Self::VolumeUp,
            129 => Self::VolumeDown,
            133 => Self::KeypadComma,
            134 => Self::KeypadEqualsAs400,
            135 => Self::International1,
            136 => Self::International2,
            137 => Self::International3,
            138 => Self::International4,
            139 => Self::International5,
            140 => Self::International6,
            141 => Self::International7,
            142 => Self::International8,
            143 => Self::International9,
            144 => Self::Lang1,
            145 => Self::Lang2,
            146 => Self::Lang3,
            147 => Self::Lang4,
            148 => Self::Lang5,
            149 => Self::Lang6,
            150 => Self::Lang7,
            151 => Self::Lang8,
            152 => Self::Lang9,
            153 => Self::AltErase,
            154 => Self::SysReq,
            155 => Self::Cancel,
            156 => Self::Clear,
            157 => Self::Prior,
            158 => Self::Return2,
            159 => Self::Separator,
            160 => Self::Out,
            161 => Self::Oper,
            162 => Self::ClearAgain,
            163 => Self::CrSel,
            164 => Self::ExSel,
            176 => Self::Keypad00,
            177 => Self::Keypad000,
            178 => Self::ThousandsSeparator,
            179 => Self::DecimalSeparator,
            180 => Self::CurrencyUnit,
            181 => Self::CurrencySubUnit,
            182 => Self::KeypadLeftParen,
            183 => Self::KeypadRightParen,
            184 => Self::KeypadLeftBrace,
            185 => Self::KeypadRightBrace,
            186 => Self::KeypadTab,
            187 => Self::KeypadBackspace,
            188 => Self::KeypadA,
            189 => Self::KeypadB,
            190 => Self::KeypadC,
            191 => Self::KeypadD,
            192 => Self::KeypadE,
            193 => Self::KeypadF,
            194 => Self::KeypadXor,
            195 => Self::KeypadPower,
            196 => Self::KeypadPercent,
            197 => Self::KeypadLess,
            198 => Self::KeypadGreater,
            199 => Self::KeypadAmpersand,
            200 => Self::KeypadDblAmpersand,
            201 => Self::KeypadVerticalBar,
            202 => Self::KeypadDblVerticalBar,
            203 => Self::KeypadColon,
            204 => Self::KeypadHash,
            205 => Self::KeypadSpace,
            206 => Self::KeypadAt,
            207 => Self::KeypadExclam,
            208 => Self::KeypadMemStore,
            209 => Self::KeypadMemRecall,
            210 => Self::KeypadMemClear,
            211 => Self::KeypadMemAdd,
            212 => Self::KeypadMemSubtract,
            213 => Self::KeypadMemMultiply,
            214 => Self::KeypadMemDivide,
            215 => Self::KeypadPlusMinus,
            216 => Self::KeypadClear,
            217 => Self::KeypadClearEntry,
            218 => Self::KeypadBinary,
            219 => Self::KeypadOctal,
            220 => Self::KeypadDecimal,
            221 => Self::KeypadHexadecimal,
            224 => Self::LCtrl,
            225 => Self::LShift,
            226 => Self::LAlt,
            227 => Self::LGui,
            228 => Self::RCtrl,
            229 => Self::RShift,
            230 => Self::RAlt,
            231 => Self::RGui,
            257 => Self::Mode,
            258 => Self::AudioNext,
            259 => Self::AudioPrev,
            260 => Self::AudioStop,
            261 => Self::AudioPlay,
            262 => Self::AudioMute,
            263 => Self::MediaSelect,
            264 => Self::Www,
            265 => Self::Mail,
            266 => Self::Calculator,
            267 => Self::Computer,
            268 => Self::AcSearch,
            269 => Self::AcHome,
            270 => Self::AcBack,
            271 => Self::AcForward,
            272 => Self::AcStop,
            273 => Self::AcRefresh,
            274 => Self::AcBookmarks,
            275 => Self::BrightnessDown,
            276 => Self::BrightnessUp,
            277 => Self::DisplaySwitch,
            278 => Self::KbdIllumToggle,
            279 => Self::KbdIllumDown,
            280 => Self::KbdIllumUp,
            281 => Self::Eject,
            282 => Self::Sleep,
            283 => Self::App1,
            284 => Self::App2,
            285 => Self::AudioRewind,
            286 => Self::AudioFastForward,
            _ => return None,
        };
        Some(sc)
    }

    /// Stable textual name of the key, e.g. `"A"`, `"LCtrl"`, `"KeypadEnter"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::G => "G",
            Self::H => "H",
            Self::I => "I",
            Self::J => "J",
            Self::K => "K",
            Self::L => "L",
            Self::M => "M",
            Self::N => "N",
            Self::O => "O",
            Self::P => "P",
            Self::Q => "Q",
            Self::R => "R",
            Self::S => "S",
            Self::T => "T",
            Self::U => "U",
            Self::V => "V",
            Self::W => "W",
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
            Self::Num1 => "Num1",
            Self::Num2 => "Num2",
            Self::Num3 => "Num3",
            Self::Num4 => "Num4",
            Self::Num5 => "Num5",
            Self::Num6 => "Num6",
            Self::Num7 => "Num7",
            Self::Num8 => "Num8",
            Self::Num9 => "Num9",
            Self::Num0 => "Num0",
            Self::Return => "Return",
            Self::Escape => "Escape",
            Self::Backspace => "Backspace",
            Self::Tab => "Tab",
            Self::Space => "Space",
            Self::Minus => "Minus",
            Self::Equals => "Equals",
            Self::LeftBracket => "LeftBracket",
            Self::RightBracket => "RightBracket",
            Self::Backslash => "Backslash",
            Self::NonUsHash => "NonUsHash",
            Self::Semicolon => "Semicolon",
            Self::Apostrophe => "Apostrophe",
            Self::Grave => "Grave",
            Self::Comma => "Comma",
            Self::Period => "Period",
            Self::Slash => "Slash",
            Self::CapsLock => "CapsLock",
            Self::F1 => "F1",
            Self::F2 => "F2",
            Self::F3 => "F3",
            Self::F4 => "F4",
            Self::F5 => "F5",
            Self::F6 => "F6",
            Self::F7 => "F7",
            Self::F8 => "F8",
            Self::F9 => "F9",
            Self::F10 => "F10",
            Self::F11 => "F11",
            Self::F12 => "F12",
            Self::PrintScreen => "PrintScreen",
            Self::ScrollLock => "ScrollLock",
            Self::Pause => "Pause",
            Self::Insert => "Insert",
            Self::Home => "Home",
            Self::PageUp => "PageUp",
            Self::Delete => "Delete",
            Self::End => "End",
            Self::PageDown => "PageDown",
            Self::Right => "Right",
            Self::Left => "Left",
            Self::Down => "Down",
            Self::Up => "Up",
            Self::NumLockClear => "NumLockClear",
            Self::KeypadDivide => "KeypadDivide",
            Self::KeypadMultiply => "KeypadMultiply",
            Self::KeypadMinus => "KeypadMinus",
            Self::KeypadPlus => "KeypadPlus",
            Self::KeypadEnter => "KeypadEnter",
            Self::Keypad1 => "Keypad1",
            Self::Keypad2 => "Keypad2",
            Self::Keypad3 => "Keypad3",
            Self::Keypad4 => "Keypad4",
            Self::Keypad5 => "Keypad5",
            Self::Keypad6 => "Keypad6",
            Self::Keypad7 => "Keypad7",
            Self::Keypad8 => "Keypad8",
            Self::Keypad9 => "Keypad9",
            Self::Keypad0 => "Keypad0",
            Self::KeypadPeriod => "KeypadPeriod",
            Self::NonUsBackslash => "NonUsBackslash",
            Self::Application => "Application",
            Self::Power => "Power",
            Self::KeypadEquals => "KeypadEquals",
            Self::F13 => "F13",
            Self::F14 => "F14",
            Self::F15 => "F15",
            Self::F16 => "F16",
            Self::F17 => "F17",
            Self::F18 => "F18",
            Self::F19 => "F19",
            Self::F20 => "F20",
            Self::F21 => "F21",
            Self::F22 => "F22",
            Self::F23 => "F23",
            Self::F24 => "F24",
            Self::Execute => "Execute",
            Self::Help => "Help",
            Self::Menu => "Menu",
            Self::Select => "Select",
            Self::Stop => "Stop",
            Self::Again => "Again",
            Self::Undo => "Undo",
            Self::Cut => "Cut",
            Self::Copy => "Copy",
            Self::Paste => "Paste",
            Self::Find => "Find",
            Self::Mute => "Mute",
            Self::VolumeUp => "VolumeUp",
            Self::VolumeDown => "VolumeDown",
            Self::KeypadComma => "KeypadComma",
            Self::KeypadEqualsAs400 => "KeypadEqualsAs400",
            Self::International1 => "International1",
            Self::International2 => "International2",
            Self::International3 => "International3",
            Self::International4 => "International4",
            Self::International5 => "International5",
            Self::International6 => "International6",
            Self::International7 => "International7",
            Self::International8 => "International8",
            Self::International9 => "International9",
            Self::Lang1 => "Lang1",
            Self::Lang2 => "Lang2",
            Self::Lang3 => "Lang3",
            Self::Lang4 => "Lang4",
            Self::Lang5 => "Lang5",
            Self::Lang6 => "Lang6",
            Self::Lang7 => "Lang7",
            Self::Lang8 => "Lang8",
            Self::Lang9 => "Lang9",
            Self::AltErase => "AltErase",
            Self::SysReq => "SysReq",
            Self::Cancel => "Cancel",
            Self::Clear => "Clear",
            Self::Prior => "Prior",
            Self::Return2 => "Return2",
            Self::Separator => "Separator",
            Self::Out => "Out",
            Self::Oper => "Oper",
            Self::ClearAgain => "ClearAgain",
            Self::CrSel => "CrSel",
            Self::ExSel => "ExSel",
            Self::Keypad00 => "Keypad00",
            Self::Keypad000 => "Keypad000",
            Self::ThousandsSeparator => "ThousandsSeparator",
            Self::DecimalSeparator => "DecimalSeparator",
            Self::CurrencyUnit => "CurrencyUnit",
            Self::CurrencySubUnit => "CurrencySubUnit",
            Self::KeypadLeftParen => "KeypadLeftParen",
            Self::KeypadRightParen => "KeypadRightParen",
            Self::KeypadLeftBrace => "KeypadLeftBrace",
            Self::KeypadRightBrace => "KeypadRightBrace",
            Self::KeypadTab => "KeypadTab",
            Self::KeypadBackspace => "KeypadBackspace",
            Self::KeypadA => "KeypadA",
            Self::KeypadB => "KeypadB",
            Self::KeypadC => "KeypadC",
            Self::KeypadD => "KeypadD",
            Self::KeypadE => "KeypadE",
            Self::KeypadF => "KeypadF",
            Self::KeypadXor => "KeypadXor",
            Self::KeypadPower => "KeypadPower",
            Self::KeypadPercent => "KeypadPercent",
            Self::KeypadLess => "KeypadLess",
            Self::KeypadGreater => "KeypadGreater",
            Self::KeypadAmpersand => "KeypadAmpersand",
            Self::KeypadDblAmpersand => "KeypadDblAmpersand",
            Self::KeypadVerticalBar => "KeypadVerticalBar",
            Self::KeypadDblVerticalBar => "KeypadDblVerticalBar",
            Self::KeypadColon => "KeypadColon",
            Self::KeypadHash => "KeypadHash",
            Self::KeypadSpace => "KeypadSpace",
            Self::KeypadAt => "KeypadAt",
            Self::KeypadExclam => "KeypadExclam",
            Self::KeypadMemStore => "KeypadMemStore",
            Self::KeypadMemRecall => "KeypadMemRecall",
            Self::KeypadMemClear => "KeypadMemClear",
            Self::KeypadMemAdd => "KeypadMemAdd",
            Self::KeypadMemSubtract => "KeypadMemSubtract",
            Self::KeypadMemMultiply => "KeypadMemMultiply",
            Self::KeypadMemDivide => "KeypadMemDivide",
            Self::KeypadPlusMinus => "KeypadPlusMinus",
            Self::KeypadClear => "KeypadClear",
            Self::KeypadClearEntry => "KeypadClearEntry",
            Self::KeypadBinary => "KeypadBinary",
            Self::KeypadOctal => "KeypadOctal",
            Self::KeypadDecimal => "KeypadDecimal",
            Self::KeypadHexadecimal => "KeypadHexadecimal",
            Self::LCtrl => "LCtrl",
            Self::LShift => "LShift",
            Self::LAlt => "LAlt",
            Self::LGui => "LGui",
            Self::RCtrl => "RCtrl",
            Self::RShift => "RShift",
            Self::RAlt => "RAlt",
            Self::RGui => "RGui",
            Self::Mode => "Mode",
            Self::AudioNext => "AudioNext",
            Self::AudioPrev => "AudioPrev",
            Self::AudioStop => "AudioStop",
            Self::AudioPlay => "AudioPlay",
            Self::AudioMute => "AudioMute",
            Self::MediaSelect => "MediaSelect",
            Self::Www => "Www",
            Self::Mail => "Mail",
            Self::Calculator => "Calculator",
            Self::Computer => "Computer",
            Self::AcSearch => "AcSearch",
            Self::AcHome => "AcHome",
            Self::AcBack => "AcBack",
            Self::AcForward => "AcForward",
            Self::AcStop => "AcStop",
            Self::AcRefresh => "AcRefresh",
            Self::AcBookmarks => "AcBookmarks",
            Self::BrightnessDown => "BrightnessDown",
            Self::BrightnessUp => "BrightnessUp",
            Self::DisplaySwitch => "DisplaySwitch",
            Self::KbdIllumToggle => "KbdIllumToggle",
            Self::KbdIllumDown => "KbdIllumDown",
            Self::KbdIllumUp => "KbdIllumUp",
            Self::Eject => "Eject",
            Self::Sleep => "Sleep",
            Self::App1 => "App1",
            Self::App2 => "App2",
            Self::AudioRewind => "AudioRewind",
            Self::AudioFastForward => "AudioFastForward",
        }
    }

    /// Every defined scancode, in ascending discriminant order.
    pub const ALL: [Scancode; 243] = [
        Self::Unknown,
        Self::A, Self::B, Self::C, Self::D, Self::E, Self::F, Self::G,
        Self::H, Self::I, Self::J, Self::K, Self::L, Self::M, Self::N,
        Self::O, Self::P, Self::Q, Self::R, Self::S, Self::T, Self::U,
        Self::V, Self::W, Self::X, Self::Y, Self::Z,
        Self::Num1, Self::Num2, Self::Num3, Self::Num4, Self::Num5,
        Self::Num6, Self::Num7, Self::Num8, Self::Num9, Self::Num0,
        Self::Return, Self::Escape, Self::Backspace, Self::Tab, Self::Space,
        Self::Minus, Self::Equals, Self::LeftBracket, Self::RightBracket,
        Self::Backslash, Self::NonUsHash, Self::Semicolon, Self::Apostrophe,
        Self::Grave, Self::Comma, Self::Period, Self::Slash,
        Self::CapsLock,
        Self::F1, Self::F2, Self::F3, Self::F4, Self::F5, Self::F6,
        Self::F7, Self::F8, Self::F9, Self::F10, Self::F11, Self::F12,
        Self::PrintScreen, Self::ScrollLock, Self::Pause, Self::Insert,
        Self::Home, Self::PageUp, Self::Delete, Self::End, Self::PageDown,
        Self::Right, Self::Left, Self::Down, Self::Up,
        Self::NumLockClear, Self::KeypadDivide, Self::KeypadMultiply,
        Self::KeypadMinus, Self::KeypadPlus, Self::KeypadEnter,
        Self::Keypad1, Self::Keypad2, Self::Keypad3, Self::Keypad4,
        Self::Keypad5, Self::Keypad6, Self::Keypad7, Self::Keypad8,
        Self::Keypad9, Self::Keypad0, Self::KeypadPeriod,
        Self::NonUsBackslash, Self::Application, Self::Power,
        Self::KeypadEquals,
        Self::F13, Self::F14, Self::F15, Self::F16, Self::F17, Self::F18,
        Self::F19, Self::F20, Self::F21, Self::F22, Self::F23, Self::F24,
        Self::Execute, Self::Help, Self::Menu, Self::Select, Self::Stop,
        Self::Again, Self::Undo, Self::Cut, Self::Copy, Self::Paste,
        Self::Find, Self::Mute, Self::VolumeUp, Self::VolumeDown,
        Self::KeypadComma, Self::KeypadEqualsAs400,
        Self::International1, Self::International2, Self::International3,
        Self::International4, Self::International5, Self::International6,
        Self::International7, Self::International8, Self::International9,
        Self::Lang1, Self::Lang2, Self::Lang3, Self::Lang4, Self::Lang5,
        Self::Lang6, Self::Lang7, Self::Lang8, Self::Lang9,
        Self::AltErase, Self::SysReq, Self::Cancel, Self::Clear,
        Self::Prior, Self::Return2, Self::Separator, Self::Out, Self::Oper,
        Self::ClearAgain, Self::CrSel, Self::ExSel,
        Self::Keypad00, Self::Keypad000, Self::ThousandsSeparator,
        Self::DecimalSeparator, Self::CurrencyUnit, Self::CurrencySubUnit,
        Self::KeypadLeftParen, Self::KeypadRightParen,
        Self::KeypadLeftBrace, Self::KeypadRightBrace, Self::KeypadTab,
        Self::KeypadBackspace, Self::KeypadA, Self::KeypadB, Self::KeypadC,
        Self::KeypadD, Self::KeypadE, Self::KeypadF, Self::KeypadXor,
        Self::KeypadPower, Self::KeypadPercent, Self::KeypadLess,
        Self::KeypadGreater, Self::KeypadAmpersand, Self::KeypadDblAmpersand,
        Self::KeypadVerticalBar, Self::KeypadDblVerticalBar,
        Self::KeypadColon, Self::KeypadHash, Self::KeypadSpace,
        Self::KeypadAt, Self::KeypadExclam, Self::KeypadMemStore,
        Self::KeypadMemRecall, Self::KeypadMemClear, Self::KeypadMemAdd,
        Self::KeypadMemSubtract, Self::KeypadMemMultiply,
        Self::KeypadMemDivide, Self::KeypadPlusMinus, Self::KeypadClear,
        Self::KeypadClearEntry, Self::KeypadBinary, Self::KeypadOctal,
        Self::KeypadDecimal, Self::KeypadHexadecimal,
        Self::LCtrl, Self::LShift, Self::LAlt, Self::LGui,
        Self::RCtrl, Self::RShift, Self::RAlt, Self::RGui,
        Self::Mode,
        Self::AudioNext, Self::AudioPrev, Self::AudioStop, Self::AudioPlay,
        Self::AudioMute, Self::MediaSelect, Self::Www, Self::Mail,
        Self::Calculator, Self::Computer, Self::AcSearch, Self::AcHome,
        Self::AcBack, Self::AcForward, Self::AcStop, Self::AcRefresh,
        Self::AcBookmarks,
        Self::BrightnessDown, Self::BrightnessUp, Self::DisplaySwitch,
        Self::KbdIllumToggle, Self::KbdIllumDown, Self::KbdIllumUp,
        Self::Eject, Self::Sleep,
        Self::App1, Self::App2,
        Self::AudioRewind, Self::AudioFastForward,
    ];
}

impl std::fmt::Display for Scancode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<i32> for Scancode {
    type Error = i32;

    /// Fallible conversion from a raw scancode; the unmatched value is
    /// returned as the error.
    fn try_from(code: i32) -> std::result::Result<Self, i32> {
        Self::from_repr(code).ok_or(code)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn hid_page_anchor_values() {
        // Spot-check values straight from the USB HID keyboard page.
        assert_eq!(Scancode::A.code(), 4);
        assert_eq!(Scancode::Num1.code(), 30);
        assert_eq!(Scancode::Num0.code(), 39);
        assert_eq!(Scancode::Return.code(), 40);
        assert_eq!(Scancode::Space.code(), 44);
        assert_eq!(Scancode::CapsLock.code(), 57);
        assert_eq!(Scancode::F12.code(), 69);
        assert_eq!(Scancode::Up.code(), 82);
        assert_eq!(Scancode::KeypadPeriod.code(), 99);
        assert_eq!(Scancode::F24.code(), 115);
        assert_eq!(Scancode::KeypadHexadecimal.code(), 221);
        assert_eq!(Scancode::LCtrl.code(), 224);
        assert_eq!(Scancode::RGui.code(), 231);
        assert_eq!(Scancode::Mode.code(), 257);
        assert_eq!(Scancode::AcBookmarks.code(), 274);
        assert_eq!(Scancode::AudioFastForward.code(), 286);
    }

    #[test]
    fn from_repr_inverts_code_for_every_variant() {
        for sc in Scancode::ALL {
            assert_eq!(Scancode::from_repr(sc.code()), Some(sc), "{sc:?}");
        }
    }

    #[test]
    fn from_repr_rejects_gaps() {
        // One probe per hole in the table, plus the out-of-range edges.
        for code in [1, 2, 3, 130, 131, 132, 165, 175, 222, 223, 232, 256] {
            assert_eq!(Scancode::from_repr(code), None, "code {code}");
        }
        assert_eq!(Scancode::from_repr(287), None);
        assert_eq!(Scancode::from_repr(NUM_SCANCODES), None);
        assert_eq!(Scancode::from_repr(-1), None);
        assert_eq!(Scancode::from_repr(i32::MAX), None);
    }

    #[test]
    fn all_is_complete_sorted_and_distinct() {
        assert_eq!(Scancode::ALL.len(), 243);
        let codes: Vec<i32> = Scancode::ALL.iter().map(|s| s.code()).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(codes, sorted, "ALL must be ascending with no duplicates");
        assert_eq!(codes.first(), Some(&0));
        assert_eq!(codes.last(), Some(&286));
    }

    #[test]
    fn every_code_below_the_sentinel() {
        for sc in Scancode::ALL {
            assert!(sc.code() < NUM_SCANCODES, "{sc:?}");
        }
    }

    #[test]
    fn names_are_nonempty_and_unique() {
        let mut seen = HashSet::new();
        for sc in Scancode::ALL {
            let name = sc.name();
            assert!(!name.is_empty(), "{sc:?} has empty name");
            assert!(seen.insert(name), "duplicate name {name:?}");
        }
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Scancode::KeypadEnter.to_string(), "KeypadEnter");
        assert_eq!(Scancode::NonUsBackslash.to_string(), "NonUsBackslash");
    }

    #[test]
    fn try_from_reports_the_rejected_value() {
        assert_eq!(Scancode::try_from(80), Ok(Scancode::Left));
        assert_eq!(Scancode::try_from(300), Err(300));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_roundtrips_by_variant_name() {
        let json = serde_json::to_string(&Scancode::LShift).expect("serialize");
        assert_eq!(json, "\"LShift\"");
        let back: Scancode = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Scancode::LShift);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_rejects_unknown_key_names() {
        let result: std::result::Result<Scancode, _> = serde_json::from_str("\"NotAKey\"");
        assert!(result.is_err());
    }
}

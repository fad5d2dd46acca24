//! The 1024-symbol alphabet and its padding marks.
//!
//! `MAPPING` assigns the values 0..=1023 to emoji in four contiguous
//! 256-codepoint runs (U+1F300.., U+1F401.., U+1F502.., U+1F603..), in
//! ascending code point order. The five padding marks live outside the
//! table, and their code points are interleaved with the runs
//! (`PADDING < PADDING_SHORT[0] < MAPPING[0]`, and
//! `MAPPING[256k - 1] < PADDING_SHORT[k] < MAPPING[256k]` for k = 1..=3).
//! That interleaving is what makes encoded text sort in the same unsigned
//! lexicographic order as the bytes it was produced from: a padded group
//! orders against an unpadded one exactly as the shorter input orders
//! against the longer.

/// One position of a group, before conversion to a concrete symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Slot {
    /// A 10-bit value from the alphabet.
    Value(u16),
    /// Closes a group holding a tail of 1 to 3 bytes.
    Padding,
    /// Closes a group holding a 4-byte tail; carries the low 2 bits of the
    /// last byte.
    PaddingShort(u8),
}

/// Marks that a group holds fewer than four values.
pub(crate) const PADDING: char = '\u{2615}';

/// Padding marks for a 4-byte tail, indexed by the low 2 bits of its last
/// byte.
pub(crate) const PADDING_SHORT: [char; 4] =
    ['\u{269C}', '\u{1F400}', '\u{1F501}', '\u{1F602}'];

/// Returns the concrete symbol for one group slot.
pub(crate) fn symbol_for(slot: Slot) -> char {
    match slot {
        Slot::Value(v) => MAPPING[usize::from(v)],
        Slot::Padding => PADDING,
        Slot::PaddingShort(k) => PADDING_SHORT[usize::from(k)],
    }
}

/// Maps a code point back to a group slot, or `None` when it is neither an
/// alphabet symbol nor a padding mark.
pub(crate) fn classify(symbol: char) -> Option<Slot> {
    if symbol == PADDING {
        return Some(Slot::Padding);
    }
    if let Some(k) = PADDING_SHORT.iter().position(|&p| p == symbol) {
        return Some(Slot::PaddingShort(k as u8));
    }
    // MAPPING is sorted by code point; see the sortedness test below.
    MAPPING
        .binary_search(&symbol)
        .ok()
        .map(|v| Slot::Value(v as u16))
}

#[rustfmt::skip]
const MAPPING: [char; 1024] = [
    '🌀', '🌁', '🌂', '🌃', '🌄', '🌅', '🌆', '🌇', // 0..=7
    '🌈', '🌉', '🌊', '🌋', '🌌', '🌍', '🌎', '🌏', // 8..=15
    '🌐', '🌑', '🌒', '🌓', '🌔', '🌕', '🌖', '🌗', // 16..=23
    '🌘', '🌙', '🌚', '🌛', '🌜', '🌝', '🌞', '🌟', // 24..=31
    '🌠', '🌡', '🌢', '🌣', '🌤', '🌥', '🌦', '🌧', // 32..=39
    '🌨', '🌩', '🌪', '🌫', '🌬', '🌭', '🌮', '🌯', // 40..=47
    '🌰', '🌱', '🌲', '🌳', '🌴', '🌵', '🌶', '🌷', // 48..=55
    '🌸', '🌹', '🌺', '🌻', '🌼', '🌽', '🌾', '🌿', // 56..=63
    '🍀', '🍁', '🍂', '🍃', '🍄', '🍅', '🍆', '🍇', // 64..=71
    '🍈', '🍉', '🍊', '🍋', '🍌', '🍍', '🍎', '🍏', // 72..=79
    '🍐', '🍑', '🍒', '🍓', '🍔', '🍕', '🍖', '🍗', // 80..=87
    '🍘', '🍙', '🍚', '🍛', '🍜', '🍝', '🍞', '🍟', // 88..=95
    '🍠', '🍡', '🍢', '🍣', '🍤', '🍥', '🍦', '🍧', // 96..=103
    '🍨', '🍩', '🍪', '🍫', '🍬', '🍭', '🍮', '🍯', // 104..=111
    '🍰', '🍱', '🍲', '🍳', '🍴', '🍵', '🍶', '🍷', // 112..=119
    '🍸', '🍹', '🍺', '🍻', '🍼', '🍽', '🍾', '🍿', // 120..=127
    '🎀', '🎁', '🎂', '🎃', '🎄', '🎅', '🎆', '🎇', // 128..=135
    '🎈', '🎉', '🎊', '🎋', '🎌', '🎍', '🎎', '🎏', // 136..=143
    '🎐', '🎑', '🎒', '🎓', '🎔', '🎕', '🎖', '🎗', // 144..=151
    '🎘', '🎙', '🎚', '🎛', '🎜', '🎝', '🎞', '🎟', // 152..=159
    '🎠', '🎡', '🎢', '🎣', '🎤', '🎥', '🎦', '🎧', // 160..=167
    '🎨', '🎩', '🎪', '🎫', '🎬', '🎭', '🎮', '🎯', // 168..=175
    '🎰', '🎱', '🎲', '🎳', '🎴', '🎵', '🎶', '🎷', // 176..=183
    '🎸', '🎹', '🎺', '🎻', '🎼', '🎽', '🎾', '🎿', // 184..=191
    '🏀', '🏁', '🏂', '🏃', '🏄', '🏅', '🏆', '🏇', // 192..=199
    '🏈', '🏉', '🏊', '🏋', '🏌', '🏍', '🏎', '🏏', // 200..=207
    '🏐', '🏑', '🏒', '🏓', '🏔', '🏕', '🏖', '🏗', // 208..=215
    '🏘', '🏙', '🏚', '🏛', '🏜', '🏝', '🏞', '🏟', // 216..=223
    '🏠', '🏡', '🏢', '🏣', '🏤', '🏥', '🏦', '🏧', // 224..=231
    '🏨', '🏩', '🏪', '🏫', '🏬', '🏭', '🏮', '🏯', // 232..=239
    '🏰', '🏱', '🏲', '🏳', '🏴', '🏵', '🏶', '🏷', // 240..=247
    '🏸', '🏹', '🏺', '🏻', '🏼', '🏽', '🏾', '🏿', // 248..=255
    '🐁', '🐂', '🐃', '🐄', '🐅', '🐆', '🐇', '🐈', // 256..=263
    '🐉', '🐊', '🐋', '🐌', '🐍', '🐎', '🐏', '🐐', // 264..=271
    '🐑', '🐒', '🐓', '🐔', '🐕', '🐖', '🐗', '🐘', // 272..=279
    '🐙', '🐚', '🐛', '🐜', '🐝', '🐞', '🐟', '🐠', // 280..=287
    '🐡', '🐢', '🐣', '🐤', '🐥', '🐦', '🐧', '🐨', // 288..=295
    '🐩', '🐪', '🐫', '🐬', '🐭', '🐮', '🐯', '🐰', // 296..=303
    '🐱', '🐲', '🐳', '🐴', '🐵', '🐶', '🐷', '🐸', // 304..=311
    '🐹', '🐺', '🐻', '🐼', '🐽', '🐾', '🐿', '👀', // 312..=319
    '👁', '👂', '👃', '👄', '👅', '👆', '👇', '👈', // 320..=327
    '👉', '👊', '👋', '👌', '👍', '👎', '👏', '👐', // 328..=335
    '👑', '👒', '👓', '👔', '👕', '👖', '👗', '👘', // 336..=343
    '👙', '👚', '👛', '👜', '👝', '👞', '👟', '👠', // 344..=351
    '👡', '👢', '👣', '👤', '👥', '👦', '👧', '👨', // 352..=359
    '👩', '👪', '👫', '👬', '👭', '👮', '👯', '👰', // 360..=367
    '👱', '👲', '👳', '👴', '👵', '👶', '👷', '👸', // 368..=375
    '👹', '👺', '👻', '👼', '👽', '👾', '👿', '💀', // 376..=383
    '💁', '💂', '💃', '💄', '💅', '💆', '💇', '💈', // 384..=391
    '💉', '💊', '💋', '💌', '💍', '💎', '💏', '💐', // 392..=399
    '💑', '💒', '💓', '💔', '💕', '💖', '💗', '💘', // 400..=407
    '💙', '💚', '💛', '💜', '💝', '💞', '💟', '💠', // 408..=415
    '💡', '💢', '💣', '💤', '💥', '💦', '💧', '💨', // 416..=423
    '💩', '💪', '💫', '💬', '💭', '💮', '💯', '💰', // 424..=431
    '💱', '💲', '💳', '💴', '💵', '💶', '💷', '💸', // 432..=439
    '💹', '💺', '💻', '💼', '💽', '💾', '💿', '📀', // 440..=447
    '📁', '📂', '📃', '📄', '📅', '📆', '📇', '📈', // 448..=455
    '📉', '📊', '📋', '📌', '📍', '📎', '📏', '📐', // 456..=463
    '📑', '📒', '📓', '📔', '📕', '📖', '📗', '📘', // 464..=471
    '📙', '📚', '📛', '📜', '📝', '📞', '📟', '📠', // 472..=479
    '📡', '📢', '📣', '📤', '📥', '📦', '📧', '📨', // 480..=487
    '📩', '📪', '📫', '📬', '📭', '📮', '📯', '📰', // 488..=495
    '📱', '📲', '📳', '📴', '📵', '📶', '📷', '📸', // 496..=503
    '📹', '📺', '📻', '📼', '📽', '📾', '📿', '🔀', // 504..=511
    '🔂', '🔃', '🔄', '🔅', '🔆', '🔇', '🔈', '🔉', // 512..=519
    '🔊', '🔋', '🔌', '🔍', '🔎', '🔏', '🔐', '🔑', // 520..=527
    '🔒', '🔓', '🔔', '🔕', '🔖', '🔗', '🔘', '🔙', // 528..=535
    '🔚', '🔛', '🔜', '🔝', '🔞', '🔟', '🔠', '🔡', // 536..=543
    '🔢', '🔣', '🔤', '🔥', '🔦', '🔧', '🔨', '🔩', // 544..=551
    '🔪', '🔫', '🔬', '🔭', '🔮', '🔯', '🔰', '🔱', // 552..=559
    '🔲', '🔳', '🔴', '🔵', '🔶', '🔷', '🔸', '🔹', // 560..=567
    '🔺', '🔻', '🔼', '🔽', '🔾', '🔿', '🕀', '🕁', // 568..=575
    '🕂', '🕃', '🕄', '🕅', '🕆', '🕇', '🕈', '🕉', // 576..=583
    '🕊', '🕋', '🕌', '🕍', '🕎', '🕏', '🕐', '🕑', // 584..=591
    '🕒', '🕓', '🕔', '🕕', '🕖', '🕗', '🕘', '🕙', // 592..=599
    '🕚', '🕛', '🕜', '🕝', '🕞', '🕟', '🕠', '🕡', // 600..=607
    '🕢', '🕣', '🕤', '🕥', '🕦', '🕧', '🕨', '🕩', // 608..=615
    '🕪', '🕫', '🕬', '🕭', '🕮', '🕯', '🕰', '🕱', // 616..=623
    '🕲', '🕳', '🕴', '🕵', '🕶', '🕷', '🕸', '🕹', // 624..=631
    '🕺', '🕻', '🕼', '🕽', '🕾', '🕿', '🖀', '🖁', // 632..=639
    '🖂', '🖃', '🖄', '🖅', '🖆', '🖇', '🖈', '🖉', // 640..=647
    '🖊', '🖋', '🖌', '🖍', '🖎', '🖏', '🖐', '🖑', // 648..=655
    '🖒', '🖓', '🖔', '🖕', '🖖', '🖗', '🖘', '🖙', // 656..=663
    '🖚', '🖛', '🖜', '🖝', '🖞', '🖟', '🖠', '🖡', // 664..=671
    '🖢', '🖣', '🖤', '🖥', '🖦', '🖧', '🖨', '🖩', // 672..=679
    '🖪', '🖫', '🖬', '🖭', '🖮', '🖯', '🖰', '🖱', // 680..=687
    '🖲', '🖳', '🖴', '🖵', '🖶', '🖷', '🖸', '🖹', // 688..=695
    '🖺', '🖻', '🖼', '🖽', '🖾', '🖿', '🗀', '🗁', // 696..=703
    '🗂', '🗃', '🗄', '🗅', '🗆', '🗇', '🗈', '🗉', // 704..=711
    '🗊', '🗋', '🗌', '🗍', '🗎', '🗏', '🗐', '🗑', // 712..=719
    '🗒', '🗓', '🗔', '🗕', '🗖', '🗗', '🗘', '🗙', // 720..=727
    '🗚', '🗛', '🗜', '🗝', '🗞', '🗟', '🗠', '🗡', // 728..=735
    '🗢', '🗣', '🗤', '🗥', '🗦', '🗧', '🗨', '🗩', // 736..=743
    '🗪', '🗫', '🗬', '🗭', '🗮', '🗯', '🗰', '🗱', // 744..=751
    '🗲', '🗳', '🗴', '🗵', '🗶', '🗷', '🗸', '🗹', // 752..=759
    '🗺', '🗻', '🗼', '🗽', '🗾', '🗿', '😀', '😁', // 760..=767
    '😃', '😄', '😅', '😆', '😇', '😈', '😉', '😊', // 768..=775
    '😋', '😌', '😍', '😎', '😏', '😐', '😑', '😒', // 776..=783
    '😓', '😔', '😕', '😖', '😗', '😘', '😙', '😚', // 784..=791
    '😛', '😜', '😝', '😞', '😟', '😠', '😡', '😢', // 792..=799
    '😣', '😤', '😥', '😦', '😧', '😨', '😩', '😪', // 800..=807
    '😫', '😬', '😭', '😮', '😯', '😰', '😱', '😲', // 808..=815
    '😳', '😴', '😵', '😶', '😷', '😸', '😹', '😺', // 816..=823
    '😻', '😼', '😽', '😾', '😿', '🙀', '🙁', '🙂', // 824..=831
    '🙃', '🙄', '🙅', '🙆', '🙇', '🙈', '🙉', '🙊', // 832..=839
    '🙋', '🙌', '🙍', '🙎', '🙏', '🙐', '🙑', '🙒', // 840..=847
    '🙓', '🙔', '🙕', '🙖', '🙗', '🙘', '🙙', '🙚', // 848..=855
    '🙛', '🙜', '🙝', '🙞', '🙟', '🙠', '🙡', '🙢', // 856..=863
    '🙣', '🙤', '🙥', '🙦', '🙧', '🙨', '🙩', '🙪', // 864..=871
    '🙫', '🙬', '🙭', '🙮', '🙯', '🙰', '🙱', '🙲', // 872..=879
    '🙳', '🙴', '🙵', '🙶', '🙷', '🙸', '🙹', '🙺', // 880..=887
    '🙻', '🙼', '🙽', '🙾', '🙿', '🚀', '🚁', '🚂', // 888..=895
    '🚃', '🚄', '🚅', '🚆', '🚇', '🚈', '🚉', '🚊', // 896..=903
    '🚋', '🚌', '🚍', '🚎', '🚏', '🚐', '🚑', '🚒', // 904..=911
    '🚓', '🚔', '🚕', '🚖', '🚗', '🚘', '🚙', '🚚', // 912..=919
    '🚛', '🚜', '🚝', '🚞', '🚟', '🚠', '🚡', '🚢', // 920..=927
    '🚣', '🚤', '🚥', '🚦', '🚧', '🚨', '🚩', '🚪', // 928..=935
    '🚫', '🚬', '🚭', '🚮', '🚯', '🚰', '🚱', '🚲', // 936..=943
    '🚳', '🚴', '🚵', '🚶', '🚷', '🚸', '🚹', '🚺', // 944..=951
    '🚻', '🚼', '🚽', '🚾', '🚿', '🛀', '🛁', '🛂', // 952..=959
    '🛃', '🛄', '🛅', '🛆', '🛇', '🛈', '🛉', '🛊', // 960..=967
    '🛋', '🛌', '🛍', '🛎', '🛏', '🛐', '🛑', '🛒', // 968..=975
    '🛓', '🛔', '🛕', '🛖', '🛗', '🛘', '🛙', '🛚', // 976..=983
    '🛛', '🛜', '🛝', '🛞', '🛟', '🛠', '🛡', '🛢', // 984..=991
    '🛣', '🛤', '🛥', '🛦', '🛧', '🛨', '🛩', '🛪', // 992..=999
    '🛫', '🛬', '🛭', '🛮', '🛯', '🛰', '🛱', '🛲', // 1000..=1007
    '🛳', '🛴', '🛵', '🛶', '🛷', '🛸', '🛹', '🛺', // 1008..=1015
    '🛻', '🛼', '🛽', '🛾', '🛿', '🜀', '🜁', '🜂', // 1016..=1023
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mapping_is_a_bijection() {
        for (i, &symbol) in MAPPING.iter().enumerate() {
            assert_eq!(classify(symbol), Some(Slot::Value(i as u16)));
        }
    }

    #[test]
    fn mapping_is_sorted_and_distinct() {
        for pair in MAPPING.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn padding_marks_are_not_alphabet_symbols() {
        assert!(MAPPING.binary_search(&PADDING).is_err());
        for (k, &mark) in PADDING_SHORT.iter().enumerate() {
            assert!(MAPPING.binary_search(&mark).is_err());
            assert_eq!(classify(mark), Some(Slot::PaddingShort(k as u8)));
        }
        assert_eq!(classify(PADDING), Some(Slot::Padding));
    }

    #[test]
    fn padding_marks_interleave_with_the_runs() {
        assert!(PADDING < PADDING_SHORT[0]);
        assert!(PADDING_SHORT[0] < MAPPING[0]);
        for k in 1..4 {
            assert!(MAPPING[256 * k - 1] < PADDING_SHORT[k]);
            assert!(PADDING_SHORT[k] < MAPPING[256 * k]);
        }
    }

    #[test]
    fn non_members_classify_to_none() {
        for symbol in ['A', ' ', '\u{2614}', '\u{1F2FF}', '\u{1F703}'].iter() {
            assert_eq!(classify(*symbol), None);
        }
    }
}

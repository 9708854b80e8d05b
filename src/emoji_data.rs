// Generated by genemoji. DO NOT EDIT.
// Source: emoji-test.txt, Unicode Emoji 13.1.

use crate::emojis::emoji::Emoji;
use crate::emojis::emoji_status::Status;

/// The edition of Unicode Emoji the table below was generated from.
pub const VERSION: &str = "13.1";

/// Every emoji from the source data file, in source order.
pub static EMOJIS: &[Emoji] = &[
    Emoji { sequence: "\u{1f600}", name: "grinning face", status: Status::FullyQualified, introduced: "1.0", fully_qualifies_as: "\u{1f600}" },
    Emoji { sequence: "\u{1f603}", name: "grinning face with big eyes", status: Status::FullyQualified, introduced: "0.6", fully_qualifies_as: "\u{1f603}" },
    Emoji { sequence: "\u{1f604}", name: "grinning face with smiling eyes", status: Status::FullyQualified, introduced: "0.6", fully_qualifies_as: "\u{1f604}" },
    Emoji { sequence: "\u{1f601}", name: "beaming face with smiling eyes", status: Status::FullyQualified, introduced: "0.6", fully_qualifies_as: "\u{1f601}" },
    Emoji { sequence: "\u{1f606}", name: "grinning squinting face", status: Status::FullyQualified, introduced: "0.6", fully_qualifies_as: "\u{1f606}" },
    Emoji { sequence: "\u{1f605}", name: "grinning face with sweat", status: Status::FullyQualified, introduced: "0.6", fully_qualifies_as: "\u{1f605}" },
    Emoji { sequence: "\u{1f923}", name: "rolling on the floor laughing", status: Status::FullyQualified, introduced: "3.0", fully_qualifies_as: "\u{1f923}" },
    Emoji { sequence: "\u{1f602}", name: "face with tears of joy", status: Status::FullyQualified, introduced: "0.6", fully_qualifies_as: "\u{1f602}" },
    Emoji { sequence: "\u{1f642}", name: "slightly smiling face", status: Status::FullyQualified, introduced: "1.0", fully_qualifies_as: "\u{1f642}" },
    Emoji { sequence: "\u{1f643}", name: "upside-down face", status: Status::FullyQualified, introduced: "1.0", fully_qualifies_as: "\u{1f643}" },
    Emoji { sequence: "\u{1f609}", name: "winking face", status: Status::FullyQualified, introduced: "0.6", fully_qualifies_as: "\u{1f609}" },
    Emoji { sequence: "\u{1f60a}", name: "smiling face with smiling eyes", status: Status::FullyQualified, introduced: "0.6", fully_qualifies_as: "\u{1f60a}" },
    Emoji { sequence: "\u{1f607}", name: "smiling face with halo", status: Status::FullyQualified, introduced: "1.0", fully_qualifies_as: "\u{1f607}" },
    Emoji { sequence: "\u{1f970}", name: "smiling face with hearts", status: Status::FullyQualified, introduced: "11.0", fully_qualifies_as: "\u{1f970}" },
    Emoji { sequence: "\u{1f60d}", name: "smiling face with heart-eyes", status: Status::FullyQualified, introduced: "0.6", fully_qualifies_as: "\u{1f60d}" },
    Emoji { sequence: "\u{1f929}", name: "star-struck", status: Status::FullyQualified, introduced: "5.0", fully_qualifies_as: "\u{1f929}" },
    Emoji { sequence: "\u{1f618}", name: "face blowing a kiss", status: Status::FullyQualified, introduced: "0.6", fully_qualifies_as: "\u{1f618}" },
    Emoji { sequence: "\u{1f617}", name: "kissing face", status: Status::FullyQualified, introduced: "1.0", fully_qualifies_as: "\u{1f617}" },
    Emoji { sequence: "\u{263a}\u{fe0f}", name: "smiling face", status: Status::FullyQualified, introduced: "0.6", fully_qualifies_as: "\u{263a}\u{fe0f}" },
    Emoji { sequence: "\u{263a}", name: "smiling face", status: Status::Unqualified, introduced: "0.6", fully_qualifies_as: "\u{263a}\u{fe0f}" },
    Emoji { sequence: "\u{1f913}", name: "nerd face", status: Status::FullyQualified, introduced: "1.0", fully_qualifies_as: "\u{1f913}" },
    Emoji { sequence: "\u{1f60e}", name: "smiling face with sunglasses", status: Status::FullyQualified, introduced: "1.0", fully_qualifies_as: "\u{1f60e}" },
    Emoji { sequence: "\u{1f9d0}", name: "face with monocle", status: Status::FullyQualified, introduced: "5.0", fully_qualifies_as: "\u{1f9d0}" },
    Emoji { sequence: "\u{1f636}\u{200d}\u{1f32b}\u{fe0f}", name: "face in clouds", status: Status::FullyQualified, introduced: "13.1", fully_qualifies_as: "\u{1f636}\u{200d}\u{1f32b}\u{fe0f}" },
    Emoji { sequence: "\u{1f636}\u{200d}\u{1f32b}", name: "face in clouds", status: Status::MinimallyQualified, introduced: "13.1", fully_qualifies_as: "\u{1f636}\u{200d}\u{1f32b}\u{fe0f}" },
    Emoji { sequence: "\u{1f635}\u{200d}\u{1f4ab}", name: "face with spiral eyes", status: Status::FullyQualified, introduced: "13.1", fully_qualifies_as: "\u{1f635}\u{200d}\u{1f4ab}" },
    Emoji { sequence: "\u{1f62e}\u{200d}\u{1f4a8}", name: "face exhaling", status: Status::FullyQualified, introduced: "13.1", fully_qualifies_as: "\u{1f62e}\u{200d}\u{1f4a8}" },
    Emoji { sequence: "\u{2764}\u{fe0f}\u{200d}\u{1f525}", name: "heart on fire", status: Status::FullyQualified, introduced: "13.1", fully_qualifies_as: "\u{2764}\u{fe0f}\u{200d}\u{1f525}" },
    Emoji { sequence: "\u{2764}\u{200d}\u{1f525}", name: "heart on fire", status: Status::Unqualified, introduced: "13.1", fully_qualifies_as: "\u{2764}\u{fe0f}\u{200d}\u{1f525}" },
    Emoji { sequence: "\u{2764}\u{fe0f}\u{200d}\u{1fa79}", name: "mending heart", status: Status::FullyQualified, introduced: "13.1", fully_qualifies_as: "\u{2764}\u{fe0f}\u{200d}\u{1fa79}" },
    Emoji { sequence: "\u{2764}\u{200d}\u{1fa79}", name: "mending heart", status: Status::Unqualified, introduced: "13.1", fully_qualifies_as: "\u{2764}\u{fe0f}\u{200d}\u{1fa79}" },
    Emoji { sequence: "\u{2764}\u{fe0f}", name: "red heart", status: Status::FullyQualified, introduced: "0.6", fully_qualifies_as: "\u{2764}\u{fe0f}" },
    Emoji { sequence: "\u{2764}", name: "red heart", status: Status::Unqualified, introduced: "0.6", fully_qualifies_as: "\u{2764}\u{fe0f}" },
    Emoji { sequence: "\u{2763}\u{fe0f}", name: "heart exclamation", status: Status::FullyQualified, introduced: "1.0", fully_qualifies_as: "\u{2763}\u{fe0f}" },
    Emoji { sequence: "\u{2763}", name: "heart exclamation", status: Status::Unqualified, introduced: "1.0", fully_qualifies_as: "\u{2763}\u{fe0f}" },
    Emoji { sequence: "\u{1f499}", name: "blue heart", status: Status::FullyQualified, introduced: "0.6", fully_qualifies_as: "\u{1f499}" },
    Emoji { sequence: "\u{1f49c}", name: "purple heart", status: Status::FullyQualified, introduced: "0.6", fully_qualifies_as: "\u{1f49c}" },
    Emoji { sequence: "\u{1f90e}", name: "brown heart", status: Status::FullyQualified, introduced: "11.0", fully_qualifies_as: "\u{1f90e}" },
    Emoji { sequence: "\u{1f5a4}", name: "black heart", status: Status::FullyQualified, introduced: "3.0", fully_qualifies_as: "\u{1f5a4}" },
    Emoji { sequence: "\u{1f90d}", name: "white heart", status: Status::FullyQualified, introduced: "12.0", fully_qualifies_as: "\u{1f90d}" },
    Emoji { sequence: "\u{1f44b}", name: "waving hand", status: Status::FullyQualified, introduced: "0.6", fully_qualifies_as: "\u{1f44b}" },
    Emoji { sequence: "\u{1f44b}\u{1f3fb}", name: "waving hand: light skin tone", status: Status::FullyQualified, introduced: "1.0", fully_qualifies_as: "\u{1f44b}\u{1f3fb}" },
    Emoji { sequence: "\u{1f44b}\u{1f3fc}", name: "waving hand: medium-light skin tone", status: Status::FullyQualified, introduced: "1.0", fully_qualifies_as: "\u{1f44b}\u{1f3fc}" },
    Emoji { sequence: "\u{1f44b}\u{1f3fd}", name: "waving hand: medium skin tone", status: Status::FullyQualified, introduced: "1.0", fully_qualifies_as: "\u{1f44b}\u{1f3fd}" },
    Emoji { sequence: "\u{1f44b}\u{1f3fe}", name: "waving hand: medium-dark skin tone", status: Status::FullyQualified, introduced: "1.0", fully_qualifies_as: "\u{1f44b}\u{1f3fe}" },
    Emoji { sequence: "\u{1f44b}\u{1f3ff}", name: "waving hand: dark skin tone", status: Status::FullyQualified, introduced: "1.0", fully_qualifies_as: "\u{1f44b}\u{1f3ff}" },
    Emoji { sequence: "\u{1f9d4}\u{200d}\u{2642}\u{fe0f}", name: "man: beard", status: Status::FullyQualified, introduced: "13.1", fully_qualifies_as: "\u{1f9d4}\u{200d}\u{2642}\u{fe0f}" },
    Emoji { sequence: "\u{1f9d4}\u{200d}\u{2642}", name: "man: beard", status: Status::MinimallyQualified, introduced: "13.1", fully_qualifies_as: "\u{1f9d4}\u{200d}\u{2642}\u{fe0f}" },
    Emoji { sequence: "\u{1f469}\u{200d}\u{2764}\u{fe0f}\u{200d}\u{1f48b}\u{200d}\u{1f468}", name: "kiss: woman, man", status: Status::FullyQualified, introduced: "2.0", fully_qualifies_as: "\u{1f469}\u{200d}\u{2764}\u{fe0f}\u{200d}\u{1f48b}\u{200d}\u{1f468}" },
    Emoji { sequence: "\u{1f469}\u{200d}\u{2764}\u{200d}\u{1f48b}\u{200d}\u{1f468}", name: "kiss: woman, man", status: Status::MinimallyQualified, introduced: "2.0", fully_qualifies_as: "\u{1f469}\u{200d}\u{2764}\u{fe0f}\u{200d}\u{1f48b}\u{200d}\u{1f468}" },
    Emoji { sequence: "\u{1f469}\u{1f3fb}\u{200d}\u{2764}\u{fe0f}\u{200d}\u{1f48b}\u{200d}\u{1f469}\u{1f3fb}", name: "kiss: woman, woman, light skin tone", status: Status::FullyQualified, introduced: "13.1", fully_qualifies_as: "\u{1f469}\u{1f3fb}\u{200d}\u{2764}\u{fe0f}\u{200d}\u{1f48b}\u{200d}\u{1f469}\u{1f3fb}" },
    Emoji { sequence: "\u{1f469}\u{1f3fb}\u{200d}\u{2764}\u{200d}\u{1f48b}\u{200d}\u{1f469}\u{1f3fb}", name: "kiss: woman, woman, light skin tone", status: Status::MinimallyQualified, introduced: "13.1", fully_qualifies_as: "\u{1f469}\u{1f3fb}\u{200d}\u{2764}\u{fe0f}\u{200d}\u{1f48b}\u{200d}\u{1f469}\u{1f3fb}" },
    Emoji { sequence: "\u{1f491}", name: "couple with heart", status: Status::FullyQualified, introduced: "0.6", fully_qualifies_as: "\u{1f491}" },
    Emoji { sequence: "\u{1f468}\u{200d}\u{1f469}\u{200d}\u{1f467}", name: "family: man, woman, girl", status: Status::FullyQualified, introduced: "2.0", fully_qualifies_as: "\u{1f468}\u{200d}\u{1f469}\u{200d}\u{1f467}" },
    Emoji { sequence: "\u{1f3fb}", name: "light skin tone", status: Status::Component, introduced: "1.0", fully_qualifies_as: "" },
    Emoji { sequence: "\u{1f3fc}", name: "medium-light skin tone", status: Status::Component, introduced: "1.0", fully_qualifies_as: "" },
    Emoji { sequence: "\u{1f3fd}", name: "medium skin tone", status: Status::Component, introduced: "1.0", fully_qualifies_as: "" },
    Emoji { sequence: "\u{1f3fe}", name: "medium-dark skin tone", status: Status::Component, introduced: "1.0", fully_qualifies_as: "" },
    Emoji { sequence: "\u{1f3ff}", name: "dark skin tone", status: Status::Component, introduced: "1.0", fully_qualifies_as: "" },
    Emoji { sequence: "\u{1f9b0}", name: "red hair", status: Status::Component, introduced: "11.0", fully_qualifies_as: "" },
    Emoji { sequence: "\u{1f9b1}", name: "curly hair", status: Status::Component, introduced: "11.0", fully_qualifies_as: "" },
    Emoji { sequence: "\u{1f9b3}", name: "white hair", status: Status::Component, introduced: "11.0", fully_qualifies_as: "" },
    Emoji { sequence: "\u{1f9b2}", name: "bald", status: Status::Component, introduced: "11.0", fully_qualifies_as: "" },
    Emoji { sequence: "\u{1f436}", name: "dog face", status: Status::FullyQualified, introduced: "0.6", fully_qualifies_as: "\u{1f436}" },
    Emoji { sequence: "\u{1f415}", name: "dog", status: Status::FullyQualified, introduced: "0.7", fully_qualifies_as: "\u{1f415}" },
    Emoji { sequence: "\u{1f9ae}", name: "guide dog", status: Status::FullyQualified, introduced: "12.0", fully_qualifies_as: "\u{1f9ae}" },
    Emoji { sequence: "\u{1f415}\u{200d}\u{1f9ba}", name: "service dog", status: Status::FullyQualified, introduced: "12.0", fully_qualifies_as: "\u{1f415}\u{200d}\u{1f9ba}" },
    Emoji { sequence: "\u{1f408}\u{200d}\u{2b1b}", name: "black cat", status: Status::FullyQualified, introduced: "13.0", fully_qualifies_as: "\u{1f408}\u{200d}\u{2b1b}" },
    Emoji { sequence: "\u{1f43b}\u{200d}\u{2744}\u{fe0f}", name: "polar bear", status: Status::FullyQualified, introduced: "13.0", fully_qualifies_as: "\u{1f43b}\u{200d}\u{2744}\u{fe0f}" },
    Emoji { sequence: "\u{1f43b}\u{200d}\u{2744}", name: "polar bear", status: Status::MinimallyQualified, introduced: "13.0", fully_qualifies_as: "\u{1f43b}\u{200d}\u{2744}\u{fe0f}" },
    Emoji { sequence: "\u{1f9a6}", name: "otter", status: Status::FullyQualified, introduced: "12.0", fully_qualifies_as: "\u{1f9a6}" },
    Emoji { sequence: "\u{2615}", name: "hot beverage", status: Status::FullyQualified, introduced: "0.6", fully_qualifies_as: "\u{2615}" },
    Emoji { sequence: "\u{1f9cb}", name: "bubble tea", status: Status::FullyQualified, introduced: "13.0", fully_qualifies_as: "\u{1f9cb}" },
    Emoji { sequence: "\u{1f697}", name: "automobile", status: Status::FullyQualified, introduced: "0.6", fully_qualifies_as: "\u{1f697}" },
    Emoji { sequence: "\u{1f6f8}", name: "flying saucer", status: Status::FullyQualified, introduced: "5.0", fully_qualifies_as: "\u{1f6f8}" },
    Emoji { sequence: "\u{26a7}\u{fe0f}", name: "transgender symbol", status: Status::FullyQualified, introduced: "13.0", fully_qualifies_as: "\u{26a7}\u{fe0f}" },
    Emoji { sequence: "\u{26a7}", name: "transgender symbol", status: Status::Unqualified, introduced: "13.0", fully_qualifies_as: "\u{26a7}\u{fe0f}" },
    Emoji { sequence: "\u{23}\u{fe0f}\u{20e3}", name: "keycap: #", status: Status::FullyQualified, introduced: "0.6", fully_qualifies_as: "\u{23}\u{fe0f}\u{20e3}" },
    Emoji { sequence: "\u{23}\u{20e3}", name: "keycap: #", status: Status::Unqualified, introduced: "0.6", fully_qualifies_as: "\u{23}\u{fe0f}\u{20e3}" },
    Emoji { sequence: "\u{2a}\u{fe0f}\u{20e3}", name: "keycap: *", status: Status::FullyQualified, introduced: "2.0", fully_qualifies_as: "\u{2a}\u{fe0f}\u{20e3}" },
    Emoji { sequence: "\u{2a}\u{20e3}", name: "keycap: *", status: Status::Unqualified, introduced: "2.0", fully_qualifies_as: "\u{2a}\u{fe0f}\u{20e3}" },
    Emoji { sequence: "\u{30}\u{fe0f}\u{20e3}", name: "keycap: 0", status: Status::FullyQualified, introduced: "0.6", fully_qualifies_as: "\u{30}\u{fe0f}\u{20e3}" },
    Emoji { sequence: "\u{30}\u{20e3}", name: "keycap: 0", status: Status::Unqualified, introduced: "0.6", fully_qualifies_as: "\u{30}\u{fe0f}\u{20e3}" },
    Emoji { sequence: "\u{1f1e9}\u{1f1ea}", name: "flag: Germany", status: Status::FullyQualified, introduced: "0.6", fully_qualifies_as: "\u{1f1e9}\u{1f1ea}" },
    Emoji { sequence: "\u{1f1fa}\u{1f1f8}", name: "flag: United States", status: Status::FullyQualified, introduced: "0.6", fully_qualifies_as: "\u{1f1fa}\u{1f1f8}" },
    Emoji { sequence: "\u{1f3f3}\u{fe0f}\u{200d}\u{1f308}", name: "rainbow flag", status: Status::FullyQualified, introduced: "4.0", fully_qualifies_as: "\u{1f3f3}\u{fe0f}\u{200d}\u{1f308}" },
    Emoji { sequence: "\u{1f3f3}\u{200d}\u{1f308}", name: "rainbow flag", status: Status::Unqualified, introduced: "4.0", fully_qualifies_as: "\u{1f3f3}\u{fe0f}\u{200d}\u{1f308}" },
    Emoji { sequence: "\u{1f3f3}\u{fe0f}\u{200d}\u{26a7}\u{fe0f}", name: "transgender flag", status: Status::FullyQualified, introduced: "13.0", fully_qualifies_as: "\u{1f3f3}\u{fe0f}\u{200d}\u{26a7}\u{fe0f}" },
    Emoji { sequence: "\u{1f3f3}\u{fe0f}\u{200d}\u{26a7}", name: "transgender flag", status: Status::MinimallyQualified, introduced: "13.0", fully_qualifies_as: "\u{1f3f3}\u{fe0f}\u{200d}\u{26a7}\u{fe0f}" },
    Emoji { sequence: "\u{1f3f3}\u{200d}\u{26a7}", name: "transgender flag", status: Status::Unqualified, introduced: "13.0", fully_qualifies_as: "\u{1f3f3}\u{fe0f}\u{200d}\u{26a7}\u{fe0f}" },
    Emoji { sequence: "\u{1f3f4}\u{200d}\u{2620}\u{fe0f}", name: "pirate flag", status: Status::FullyQualified, introduced: "11.0", fully_qualifies_as: "\u{1f3f4}\u{200d}\u{2620}\u{fe0f}" },
    Emoji { sequence: "\u{1f3f4}\u{200d}\u{2620}", name: "pirate flag", status: Status::MinimallyQualified, introduced: "11.0", fully_qualifies_as: "\u{1f3f4}\u{200d}\u{2620}\u{fe0f}" },
    Emoji { sequence: "\u{1f3f4}\u{e0067}\u{e0062}\u{e0065}\u{e006e}\u{e0067}\u{e007f}", name: "flag: England", status: Status::FullyQualified, introduced: "5.0", fully_qualifies_as: "\u{1f3f4}\u{e0067}\u{e0062}\u{e0065}\u{e006e}\u{e0067}\u{e007f}" },
];

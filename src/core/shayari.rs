// Slide content. Each shayari is exactly four lines.

pub type Shayari = [&'static str; 4];

pub const SHAYARI_COLLECTION: &[Shayari] = &[
    [
        "In your eyes, I found my home,",
        "A place where love has always grown,",
        "With every heartbeat, every sigh,",
        "You're the reason stars light up my sky.",
    ],
    [
        "Your smile is like the morning sun,",
        "A new beginning, a day begun,",
        "In your embrace, I find my peace,",
        "A love so pure, it will never cease.",
    ],
    [
        "When you hold my hand so tight,",
        "The world feels perfectly right,",
        "Every moment spent with you,",
        "Makes all my dreams come true.",
    ],
    [
        "Your laughter is my favorite song,",
        "With you is where I belong,",
        "In this journey, side by side,",
        "You're my love, my joy, my pride.",
    ],
    [
        "Like the moon needs the night,",
        "You make everything feel right,",
        "In your love, I've found my way,",
        "Forever yours, come what may.",
    ],
    [
        "Your touch is like a gentle breeze,",
        "That puts my restless heart at ease,",
        "With you, my love, I am complete,",
        "You make my life so bittersweet.",
    ],
    [
        "Distance may keep us apart,",
        "But you're always in my heart,",
        "Every thought, every prayer,",
        "Reminds me how much I care.",
    ],
];

pub const BACKGROUNDS: &[&str] = &[
    "/assets/generated/romantic-bg-1.dim_1920x1080.png",
    "/assets/generated/romantic-bg-2.dim_1920x1080.png",
];

//! Shared Tailwind class constants so the three forms look the same.

pub struct Theme;

impl Theme {
    /// White card holding a single form.
    pub const CARD: &'static str = "bg-white rounded-lg shadow-lg w-full max-w-md p-8";

    pub const TITLE: &'static str = "text-2xl font-semibold mb-6";

    pub const LABEL: &'static str = "block text-sm font-medium mb-1";

    pub const INPUT: &'static str = "input input-bordered w-full";

    /// Extra right padding leaves room for the visibility toggle.
    pub const INPUT_MASKED: &'static str = "input input-bordered w-full pr-10";

    pub const PROMPT: &'static str = "text-gray-500 text-sm mt-1 font-sans leading-5 text-left";

    pub const ERROR: &'static str = "text-red-500 text-sm mt-1";

    pub const LINK: &'static str = "text-primary";
}

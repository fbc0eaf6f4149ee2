use yew::prelude::*;

/// Tailwind class palette. The `primary` scale of the design maps onto
/// Tailwind's `sky` colours.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub page: &'static str,
    pub header: &'static str,
    pub card: &'static str,
    pub heading: &'static str,
    pub section_title: &'static str,
    pub body_text: &'static str,
    pub muted_text: &'static str,
    pub link: &'static str,
    pub input: &'static str,
    pub button: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            page: "min-h-screen bg-gray-50",
            header: "bg-white shadow-sm",
            card: "w-full p-4 bg-white rounded-lg shadow-sm hover:shadow-md transition-shadow duration-200",
            heading: "text-2xl font-bold text-sky-700",
            section_title: "text-lg font-semibold text-sky-700 mb-4",
            body_text: "text-gray-600",
            muted_text: "text-gray-500",
            link: "text-sky-500 hover:text-sky-600 hover:underline",
            input: "flex-grow p-3 border border-gray-300 rounded-l-lg focus:outline-none focus:ring-2 focus:ring-sky-500 disabled:bg-gray-100",
            button: "bg-sky-600 text-white px-5 py-3 rounded-r-lg hover:bg-sky-700 focus:outline-none focus:ring-2 focus:ring-sky-500 disabled:opacity-50",
        }
    }
}

#[hook]
pub fn use_theme() -> Theme {
    use_context::<Theme>().unwrap_or_default()
}

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MessageVariant {
    #[default]
    Info,
    Danger,
}

/// Inline message box, rendered in place of the section it reports on
#[component]
pub fn MessageBox(#[props(default)] variant: MessageVariant, message: String) -> Element {
    let class = match variant {
        MessageVariant::Info => {
            "message-box bg-blue-50 border border-blue-200 text-blue-900 px-4 py-3 rounded mb-4"
        }
        MessageVariant::Danger => {
            "message-box bg-red-100 border border-red-300 text-red-900 px-4 py-3 rounded mb-4"
        }
    };

    rsx! {
        div { class: "{class}",
            p { "{message}" }
        }
    }
}

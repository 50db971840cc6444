//! Themed button

use dioxus::prelude::*;

use crate::state::AppState;
use crate::theme::ColorPalette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    Ghost,
}

impl ButtonVariant {
    fn style(self, colors: &ColorPalette) -> String {
        match self {
            Self::Primary => format!(
                "background: {}; color: {}; border: none; \
                 box-shadow: 0 3px 5px 2px rgba(33, 203, 243, 0.3);",
                colors.accent_gradient, colors.accent_text
            ),
            Self::Secondary => format!(
                "background: transparent; color: {}; border: 1px solid {};",
                colors.text_secondary, colors.border
            ),
            Self::Destructive => format!(
                "background: transparent; color: {}; border: 1px solid {};",
                colors.error, colors.error
            ),
            Self::Ghost => format!(
                "background: transparent; color: {}; border: none;",
                colors.accent
            ),
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default)] title: String,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let variant_style = variant.style(colors);
    let opacity = if disabled { "0.6" } else { "1" };
    let cursor = if disabled { "default" } else { "pointer" };

    rsx! {
        button {
            r#type: "button",
            title: "{title}",
            disabled,
            style: "
                {variant_style}
                padding: 8px 16px;
                border-radius: 8px;
                font-size: 14px;
                font-weight: 500;
                opacity: {opacity};
                cursor: {cursor};
            ",
            onclick: move |evt| {
                evt.stop_propagation();
                onclick.call(evt);
            },
            {children}
        }
    }
}

use dioxus::prelude::*;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Destructive,
    Outline,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Outline => "outline",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    /// Compact padding for buttons inside cards and table rows.
    #[props(default)]
    small: bool,
    #[props(extends = GlobalAttributes)]
    #[props(extends = button)]
    attributes: Vec<Attribute>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: if small { "button button-small" } else { "button" },
            "data-style": variant.class(),
            onclick: move |event| {
                if let Some(handler) = &onclick {
                    handler.call(event);
                }
            },
            ..attributes,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_is_styled() {
        let css = include_str!("../../assets/projecthub.css");
        for variant in [
            ButtonVariant::Primary,
            ButtonVariant::Destructive,
            ButtonVariant::Outline,
        ] {
            let selector = format!(".button[data-style=\"{}\"]", variant.class());
            assert!(css.contains(&selector), "no rule for {selector}");
        }
    }
}

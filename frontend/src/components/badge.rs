use leptos::*;

#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub enum BadgeVariant {
    #[default]
    Default,
    Success,
    Danger,
}

impl BadgeVariant {
    fn class(self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge",
            BadgeVariant::Success => "badge bg-success",
            BadgeVariant::Danger => "badge bg-danger",
        }
    }
}

pub(crate) fn badge_class(variant: BadgeVariant, pill: bool) -> String {
    if pill {
        format!("{} rounded-pill", variant.class())
    } else {
        variant.class().to_string()
    }
}

/// Small count/status label, used for the cart item count.
#[component]
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    #[prop(optional)] pill: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <span class=badge_class(variant, pill)>
            {children()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_classes() {
        assert_eq!(badge_class(BadgeVariant::Default, false), "badge");
        assert_eq!(badge_class(BadgeVariant::Danger, true), "badge bg-danger rounded-pill");
        assert_eq!(badge_class(BadgeVariant::Success, false), "badge bg-success");
    }
}

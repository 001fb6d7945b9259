use leptos::prelude::*;

/// Decorative icon served from `public/icons`
#[component]
pub fn Icon(
    /// Icon file name without the .svg extension
    name: &'static str,
    /// CSS classes for sizing and spacing
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icon names available under `public/icons`
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const ARROW_UP: &str = "arrow-up";
    pub const CALENDAR: &str = "calendar";
    pub const CHECK: &str = "check";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CHEVRON_LEFT: &str = "chevron-left";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const COOKIE: &str = "cookie";
    pub const FILE: &str = "file";
    pub const LINK: &str = "link";
    pub const LOADER: &str = "loader";
    pub const MAIL: &str = "mail";
    pub const MENU: &str = "menu";
    pub const MIC: &str = "mic";
    pub const PLAY: &str = "play";
    pub const ROTATE: &str = "rotate-ccw";
    pub const SEARCH: &str = "search";
    pub const SEND: &str = "send";
    pub const SPARKLES: &str = "sparkles";
    pub const STAR: &str = "star";
    pub const UPLOAD: &str = "upload";
    pub const USER: &str = "user";
    pub const X: &str = "x";
}

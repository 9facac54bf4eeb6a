//! Content transforms for the two overridden templates.

use crate::config::{LoginLogo, SidebarLogo};
use crate::error::Result;
use crate::fragment::{FragmentReplacer, Marker};

pub const LOGIN_LOGO_MARKER: Marker<'static> = Marker::token("div", "mautic-logo");
pub const DESKTOP_LOGO_MARKER: Marker<'static> = Marker::prefix("div", "brand-logo--desktop");
pub const MOBILE_LOGO_MARKER: Marker<'static> = Marker::prefix("div", "brand-logo--mobile");

pub fn login_logo_html(logo: &LoginLogo) -> String {
    format!(
        r#"<img src="{}" style="width: {}px; margin: {}px 0 {}px 0;" />"#,
        logo.src, logo.width, logo.margin_top, logo.margin_bottom
    )
}

pub fn desktop_logo_html(logo: &SidebarLogo) -> String {
    format!(
        r#"<img src="{}" style="width: {}px; margin: {}px {}px 0 {}px;" />"#,
        logo.src, logo.width, logo.margin_top, logo.margin_right, logo.margin_left
    )
}

// The minimized sidebar logo is fixed at 40px whatever the config says.
pub fn mobile_logo_html(logo: &SidebarLogo) -> String {
    format!(r#"<img src="{}" style="width: 40px; margin: 0;" />"#, logo.src)
}

pub fn patch_login<R: FragmentReplacer>(
    replacer: &R,
    content: &str,
    logo: &LoginLogo,
) -> Result<String> {
    let html = login_logo_html(logo);
    let patched = replacer.replace(content, &LOGIN_LOGO_MARKER, &|_| html.clone())?;
    Ok(patched.into_owned())
}

pub fn patch_navbar<R: FragmentReplacer>(
    replacer: &R,
    content: &str,
    logo: &SidebarLogo,
) -> Result<String> {
    let desktop = desktop_logo_html(logo);
    let mobile = mobile_logo_html(logo);
    let content = replacer.replace(content, &DESKTOP_LOGO_MARKER, &|_| desktop.clone())?;
    let content = replacer.replace(&content, &MOBILE_LOGO_MARKER, &|_| mobile.clone())?;
    Ok(content.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WhitelabelConfig;
    use crate::fragment::RegexFragmentReplacer;

    const LOGIN_TEMPLATE: &str = r#"{% block content %}
<div class="mautic-logo foo">OLD</div>
<form></form>
{% endblock %}
"#;

    const NAVBAR_TEMPLATE: &str = r#"<div class="navbar-brand">
    <div class="brand-logo--desktop">
        <img src="{{ getAssetUrl('media/images/logo--expanded.svg') }}" />
    </div>
    <div class="brand-logo--mobile hidden">
        <img src="{{ getAssetUrl('media/images/logo--minimized.svg') }}" />
    </div>
</div>
"#;

    fn config(items: &[(&str, &str)]) -> WhitelabelConfig {
        WhitelabelConfig::from_pairs(
            items
                .iter()
                .map(|(k, v)| (format!("WHITELABEL_{}", k), v.to_string())),
        )
    }

    #[test]
    fn test_login_round_trip() {
        let cfg = config(&[("LOGIN_LOGO", "https://x/y.png"), ("LOGIN_LOGO_WIDTH", "150")]);
        let logo = LoginLogo::from_config(&cfg).unwrap();
        let out = patch_login(&RegexFragmentReplacer, LOGIN_TEMPLATE, &logo).unwrap();

        assert_eq!(out.matches(r#"<div class="mautic-logo foo">"#).count(), 1);
        assert!(out.contains(
            r#"<div class="mautic-logo foo"><img src="https://x/y.png" style="width: 150px; margin: 0px 0 0px 0;" /></div>"#
        ));
        assert!(out.contains("<form></form>"));
    }

    #[test]
    fn test_login_patch_is_idempotent() {
        let cfg = config(&[
            ("LOGIN_LOGO", "a.png"),
            ("LOGIN_LOGO_MARGIN_TOP", "10"),
            ("LOGIN_LOGO_MARGIN_BOTTOM", "20"),
        ]);
        let logo = LoginLogo::from_config(&cfg).unwrap();
        let once = patch_login(&RegexFragmentReplacer, LOGIN_TEMPLATE, &logo).unwrap();
        let twice = patch_login(&RegexFragmentReplacer, &once, &logo).unwrap();
        assert_eq!(once, twice);
        assert!(once.contains("margin: 10px 0 20px 0;"));
    }

    #[test]
    fn test_navbar_patch_desktop_and_mobile() {
        let cfg = config(&[
            ("SIDEBAR_LOGO", "https://x/s.png"),
            ("SIDEBAR_LOGO_WIDTH", "110"),
            ("SIDEBAR_LOGO_MARGIN_TOP", "5"),
            ("SIDEBAR_LOGO_MARGIN_LEFT", "7"),
            ("SIDEBAR_LOGO_MARGIN_RIGHT", "9"),
        ]);
        let logo = SidebarLogo::from_config(&cfg).unwrap();
        let out = patch_navbar(&RegexFragmentReplacer, NAVBAR_TEMPLATE, &logo).unwrap();

        assert!(out.contains(
            r#"<div class="brand-logo--desktop"><img src="https://x/s.png" style="width: 110px; margin: 5px 9px 0 7px;" /></div>"#
        ));
        assert!(out.contains(
            r#"<div class="brand-logo--mobile hidden"><img src="https://x/s.png" style="width: 40px; margin: 0;" /></div>"#
        ));
        assert!(!out.contains("logo--expanded.svg"));
        assert!(!out.contains("logo--minimized.svg"));
    }

    #[test]
    fn test_navbar_defaults() {
        let cfg = config(&[("SIDEBAR_LOGO", "s.png")]);
        let logo = SidebarLogo::from_config(&cfg).unwrap();
        assert_eq!(
            desktop_logo_html(&logo),
            r#"<img src="s.png" style="width: 130px; margin: 0px 0px 0 0px;" />"#
        );
    }

    #[test]
    fn test_mobile_ignores_configured_size() {
        let cfg = config(&[("SIDEBAR_LOGO", "s.png"), ("SIDEBAR_LOGO_WIDTH", "300")]);
        let logo = SidebarLogo::from_config(&cfg).unwrap();
        assert_eq!(
            mobile_logo_html(&logo),
            r#"<img src="s.png" style="width: 40px; margin: 0;" />"#
        );
    }

    #[test]
    fn test_navbar_patch_is_idempotent() {
        let cfg = config(&[("SIDEBAR_LOGO", "s.png")]);
        let logo = SidebarLogo::from_config(&cfg).unwrap();
        let once = patch_navbar(&RegexFragmentReplacer, NAVBAR_TEMPLATE, &logo).unwrap();
        let twice = patch_navbar(&RegexFragmentReplacer, &once, &logo).unwrap();
        assert_eq!(once, twice);
    }
}

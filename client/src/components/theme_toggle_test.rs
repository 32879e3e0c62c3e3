use super::*;

#[test]
fn light_theme_offers_moon() {
    let mut theme = ThemeState::default();
    theme.resolve(Some(false));
    assert_eq!(toggle_icon(theme), Icon::Moon);
}

#[test]
fn dark_theme_offers_sun() {
    let mut theme = ThemeState::default();
    theme.resolve(Some(true));
    assert_eq!(toggle_icon(theme), Icon::Sun);
}

#[test]
fn icon_follows_each_toggle() {
    let mut theme = ThemeState::default();
    theme.resolve(Some(false));
    theme.toggle();
    assert_eq!(toggle_icon(theme), Icon::Sun);
    theme.toggle();
    assert_eq!(toggle_icon(theme), Icon::Moon);
}

//! Defaults shipped with the theme.
//!
//! `init` writes this model out as the starting `theme.toml`.

use crate::config::section::features::{
    FallbackBgType, OgImageOptions, SlideEnterAnimOptions, TocDisplayMode, TocOptions,
    TocPosition,
};
use crate::config::section::ui::{
    DisplayMode, ExternalLinkConfig, GroupViewConfig, NavBarLayout, NavEntry, PostMetaStyle,
    SocialLink, TabbedLayoutTab,
};
use crate::config::{FeaturesConfig, SiteConfig, ThemeConfig, Toggle, UiConfig};

impl ThemeConfig {
    /// The built-in configuration.
    pub fn builtin() -> Self {
        let site = builtin_site();
        let features = builtin_features(&site);
        Self {
            site,
            ui: builtin_ui(),
            features,
        }
    }
}

fn builtin_site() -> SiteConfig {
    SiteConfig {
        website: "https://astro-antfustyle-theme.vercel.app/".into(),
        base: "/".into(),
        title: "良颂".into(),
        description: "良颂的个人网站，记录生活、学习、工作中的点滴。".into(),
        author: "良颂".into(),
        lang: "en".into(),
        og_locale: "en_US".into(),
        image_domains: vec!["cdn.bsky.app".into(), "images.unsplash.com".into()],
    }
}

fn builtin_ui() -> UiConfig {
    UiConfig {
        internal_navs: vec![NavEntry {
            path: "/blog".into(),
            title: "技术分享".into(),
            display_mode: DisplayMode::AlwaysText,
            text: Some("学习笔记".into()),
            icon: None,
        }],
        social_links: vec![SocialLink {
            link: "https://github.com/github-xsong".into(),
            title: "Github 主页".into(),
            display_mode: DisplayMode::AlwaysIcon,
            text: None,
            icon: Some("i-uil-github-alt".into()),
        }],
        nav_bar_layout: NavBarLayout::default(),
        tabbed_layout_tabs: [
            ("Changelog", "/changelog"),
            ("AstroBlog", "/feeds"),
            ("AstroStreams", "/streams"),
        ]
        .into_iter()
        .map(|(title, path)| TabbedLayoutTab {
            title: title.into(),
            path: path.into(),
        })
        .collect(),
        group_view: GroupViewConfig::default(),
        github_view: None,
        external_link: ExternalLinkConfig::default(),
        post_meta_style: PostMetaStyle::Minimal,
    }
}

/// Share and giscus ship disabled.
fn builtin_features(site: &SiteConfig) -> FeaturesConfig {
    FeaturesConfig {
        slide_enter_anim: Toggle::Enabled(SlideEnterAnimOptions { enter_step: 60 }),
        og_image: Toggle::Enabled(OgImageOptions::from_site(site, FallbackBgType::Plum)),
        toc: Toggle::Enabled(TocOptions {
            min_heading_level: 2,
            max_heading_level: 4,
            display_position: TocPosition::Left,
            display_mode: TocDisplayMode::Content,
        }),
        share: Toggle::Disabled,
        giscus: Toggle::Disabled,
    }
}

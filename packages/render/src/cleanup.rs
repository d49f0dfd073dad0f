//! What the host should remove from frontend output.

use serde::Serialize;

use blockplus_records::FrontendSettings;

/// A hook callback to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HookRemoval {
    pub hook: &'static str,
    pub callback: &'static str,
}

const fn hook(hook: &'static str, callback: &'static str) -> HookRemoval {
    HookRemoval { hook, callback }
}

const BLOCK_LIBRARY_STYLES: &[&str] = &["wp-block-library", "wp-block-library-theme", "wc-blocks-style"];
const GLOBAL_STYLES: &[&str] = &["global-styles", "wp-global-styles"];
const EMBED_SCRIPTS: &[&str] = &["wp-embed"];

const DUOTONE_ACTIONS: &[HookRemoval] = &[
    hook("wp_body_open", "wp_global_styles_render_svg_filters"),
    hook("in_admin_header", "wp_global_styles_render_svg_filters"),
];

const HEAD_ACTIONS: &[HookRemoval] = &[
    hook("wp_head", "rsd_link"),
    hook("wp_head", "wlwmanifest_link"),
    hook("wp_head", "wp_generator"),
    hook("wp_head", "wp_shortlink_wp_head"),
    hook("wp_head", "rest_output_link_wp_head"),
    hook("wp_head", "wp_oembed_add_discovery_links"),
    hook("wp_head", "adjacent_posts_rel_link_wp_head"),
];

const EMOJI_ACTIONS: &[HookRemoval] = &[
    hook("wp_head", "print_emoji_detection_script"),
    hook("admin_print_scripts", "print_emoji_detection_script"),
    hook("wp_print_styles", "print_emoji_styles"),
    hook("admin_print_styles", "print_emoji_styles"),
];

const EMOJI_FILTERS: &[HookRemoval] = &[
    hook("the_content_feed", "wp_staticize_emoji"),
    hook("comment_text_rss", "wp_staticize_emoji"),
    hook("wp_mail", "wp_staticize_emoji_for_email"),
];

/// Removals implied by the frontend settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanupPlan {
    pub dequeue_styles: Vec<&'static str>,
    pub dequeue_scripts: Vec<&'static str>,
    pub remove_actions: Vec<HookRemoval>,
    pub remove_filters: Vec<HookRemoval>,
    /// Class tokens stripped from rendered content.
    pub strip_classes: Vec<String>,
}

impl CleanupPlan {
    pub fn from_settings(settings: &FrontendSettings) -> CleanupPlan {
        let mut plan = CleanupPlan {
            strip_classes: settings.classes_to_remove(),
            ..CleanupPlan::default()
        };

        if settings.remove_block_library {
            plan.dequeue_styles.extend_from_slice(BLOCK_LIBRARY_STYLES);
        }
        if settings.remove_global_styles {
            plan.dequeue_styles.extend_from_slice(GLOBAL_STYLES);
        }
        if settings.remove_embed_script {
            plan.dequeue_scripts.extend_from_slice(EMBED_SCRIPTS);
        }
        if settings.remove_duotone_svg {
            plan.remove_actions.extend_from_slice(DUOTONE_ACTIONS);
        }
        if settings.clean_head {
            plan.remove_actions.extend_from_slice(HEAD_ACTIONS);
        }
        if settings.remove_emoji_scripts {
            plan.remove_actions.extend_from_slice(EMOJI_ACTIONS);
            plan.remove_filters.extend_from_slice(EMOJI_FILTERS);
        }
        plan
    }

    pub fn is_empty(&self) -> bool {
        *self == CleanupPlan::default()
    }
}

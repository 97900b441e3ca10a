//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# blockshade configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[render]
# width = 640               # 1-8192
# height = 480              # 1-8192
# clear_color = "#050505"
# backend = "software"      # software, gpu
# max_instances = 4096      # 1-1000000

[sampler]
# address_mode = "clamp_to_edge"   # clamp_to_edge, repeat, mirror_repeat
# mag_filter = "linear"            # nearest, linear
# min_filter = "nearest"

[logging]
# level = "info"            # trace, debug, info, warn, error
"##
    .to_string()
}

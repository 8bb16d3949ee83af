/// Default config file content. Every value is commented out.
pub(crate) fn default_config_toml() -> String {
    r##"# Quillview Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[editor]
# initial_value = "<p>Hello</p>"   # pushed to the editor on mount and on change
# read_only = false
# placeholder = "Compose..."
# formats = ["bold", "italic", "underline", "list", "bullet", "link"]
# theme = "snow"                   # snow, bubble
# save_path = "~/notes.html"       # saved documents are appended here

[window]
# title = "Quillview"
# width = 720                      # 200-7680
# height = 540                     # 200-4320
# transparent = false
# devtools = false

[bootstrap]
# assets_dir = "/usr/share/quillview/assets"
# document = "editor/index.html"

[logging]
# level = "INFO"                   # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}

//! Script-level glue between the host and the content view.
//!
//! - **editor -> host**: the bootstrap document calls
//!   `window.ReactNativeWebView.postMessage(JSON.stringify({...}))`, which the
//!   initialization script below forwards to wry's `window.ipc.postMessage`.
//! - **host -> editor**: the host evaluates `window.postMessage(<payload>, '*');`
//!   inside the content view, which raises a `message` event on the surfaces
//!   the editor listens on.

/// Injected as an initialization script into the editor WebView so the
/// bootstrap document can post outward without knowing which host runs it.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    if (window.ReactNativeWebView) {
        return;
    }
    window.ReactNativeWebView = {
        postMessage: function(msg) {
            window.ipc.postMessage(typeof msg === 'string' ? msg : JSON.stringify(msg));
        }
    };
})();
"#;

const POST_MESSAGE_PREFIX: &str = "window.postMessage(";
const POST_MESSAGE_SUFFIX: &str = ", '*');";

/// Build the instruction that delivers `payload_json` as a message event
/// inside the content view.
///
/// `payload_json` must be serialized JSON; it is embedded as a JavaScript
/// object literal. U+2028/U+2029 are escaped because older engines reject
/// them inside literals.
pub fn post_message_script(payload_json: &str) -> String {
    let literal = payload_json
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029");
    format!("{POST_MESSAGE_PREFIX}{literal}{POST_MESSAGE_SUFFIX}")
}

/// Extract the payload literal from a script built by [`post_message_script`].
///
/// Returns `None` for any other script.
pub fn parse_post_message_script(script: &str) -> Option<&str> {
    script
        .trim()
        .strip_prefix(POST_MESSAGE_PREFIX)?
        .strip_suffix(POST_MESSAGE_SUFFIX)
}

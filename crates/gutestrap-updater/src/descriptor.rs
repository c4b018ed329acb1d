//! Descriptor construction from remote headers.

use gutestrap_config::{PluginIdentity, RemoteSource};
use gutestrap_host::{HeaderField, PluginHeaders, RemotePluginDescriptor};

/// Section holding the plugin description.
pub const SECTION_DESCRIPTION: &str = "description";

/// Section holding installation instructions.
pub const SECTION_INSTALLATION: &str = "installation";

/// Section linking to the change history.
pub const SECTION_CHANGELOG: &str = "changelog";

/// Builds a descriptor from the headers of the remote entry file.
#[must_use]
pub fn from_headers(
    identity: &PluginIdentity,
    remote: &RemoteSource,
    headers: &PluginHeaders,
) -> RemotePluginDescriptor {
    let field = |f: HeaderField| headers.get(f).map(str::to_string);

    RemotePluginDescriptor {
        slug: identity.slug().to_string(),
        plugin: identity.basename(),
        name: field(HeaderField::Name),
        version: field(HeaderField::Version),
        package: remote.archive_url(),
        url: field(HeaderField::PluginUri),
        author: field(HeaderField::Author),
        requires: field(HeaderField::RequiresWp),
        require_php: field(HeaderField::RequiresPhp),
        icons: remote.icons(),
        banners: remote.banners(),
        sections: std::collections::BTreeMap::new(),
    }
}

/// Builds the descriptor a host records for the installed copy before it
/// learns about the remote one.
#[must_use]
pub fn for_installed(
    identity: &PluginIdentity,
    remote: &RemoteSource,
    installed_version: &str,
) -> RemotePluginDescriptor {
    RemotePluginDescriptor {
        slug: identity.slug().to_string(),
        plugin: identity.basename(),
        version: Some(installed_version.to_string()),
        package: remote.archive_url(),
        icons: remote.icons(),
        banners: remote.banners(),
        ..RemotePluginDescriptor::default()
    }
}

/// Adds the human-readable sections shown in the details view.
pub fn decorate_sections(
    descriptor: &mut RemotePluginDescriptor,
    remote: &RemoteSource,
    description: Option<&str>,
) {
    let display_name = descriptor
        .name
        .clone()
        .unwrap_or_else(|| descriptor.slug.clone());

    let description = description.map_or_else(
        || format!("<p>{}</p>", escape_html(&display_name)),
        |d| format!("<p>{}</p>", escape_html(d)),
    );

    let installation = format!(
        "<ol>\
         <li>Download <a href=\"{archive}\">{slug}.zip</a>.</li>\
         <li>Upload the archive from <strong>Plugins &rarr; Add New &rarr; Upload Plugin</strong>.</li>\
         <li>Activate {name}.</li>\
         </ol>",
        archive = escape_html(&descriptor.package),
        slug = escape_html(&descriptor.slug),
        name = escape_html(&display_name),
    );

    let changelog = format!(
        "<p>See the <a href=\"{}\">commit history</a> of the {} branch.</p>",
        escape_html(&remote.changelog_url()),
        escape_html(remote.branch()),
    );

    descriptor
        .sections
        .insert(SECTION_DESCRIPTION.to_string(), description);
    descriptor
        .sections
        .insert(SECTION_INSTALLATION.to_string(), installation);
    descriptor
        .sections
        .insert(SECTION_CHANGELOG.to_string(), changelog);
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

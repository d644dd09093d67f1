use std::path::PathBuf;

xflags::xflags! {
    /// Render ActivityPub documents from domain snapshots.
    cmd apub-render {
        /// TOML configuration file.
        optional -c,--config config: PathBuf

        /// Render one fixture file and print the JSON-LD document.
        cmd render {
            required fixture: PathBuf
            /// Mapping to use instead of the fixture's or the default one.
            optional -m,--mapping mapping: String
            /// Always reference wrapped objects by URI.
            optional --no-inline
            /// Emit quote approvals before the quote is accepted.
            optional --force-approval-id
            /// Fixed clock, RFC 3339.
            optional --now now: String
        }

        /// Serve the fixture directory over HTTP.
        cmd serve {}
    }
}

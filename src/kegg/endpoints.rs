// Public KEGG API operations.
// Each call validates its arguments, resolves content through the cache, and
// parses text bodies into structured listings.

use crate::error::Result;

use super::client::KeggClient;
use super::parse;
use super::request;
use super::types::{Content, FindOption, GetOption, ListOption, Listing};

impl KeggClient {
    /// KEGG `list` operation: entries of one database, optionally restricted
    /// by a [`ListOption`].
    pub fn list(
        &self,
        database: &str,
        option: Option<ListOption>,
        want_descriptions: bool,
        force_refresh: bool,
    ) -> Result<Listing> {
        let request = request::list(
            &self.config().base_url,
            self.vocabulary(),
            database,
            option.as_ref(),
        )?;
        let text = self.load_text(&request.url, &request.filename, force_refresh)?;
        parse::parse_listing(&text, want_descriptions)
    }

    /// KEGG `find` operation: entries of `database` matching `query`.
    pub fn find(
        &self,
        database: &str,
        query: &str,
        option: Option<FindOption>,
        want_descriptions: bool,
        force_refresh: bool,
    ) -> Result<Listing> {
        let request = request::find(
            &self.config().base_url,
            self.vocabulary(),
            database,
            query,
            option,
        )?;
        let text = self.load_text(&request.url, &request.filename, force_refresh)?;
        parse::parse_listing(&text, want_descriptions)
    }

    /// KEGG `get` operation: one database entry, decoded per the option
    /// (text description by default, JSON or image when requested).
    pub fn get(
        &self,
        entry: &str,
        option: Option<GetOption>,
        force_refresh: bool,
    ) -> Result<Content> {
        let request = request::get(&self.config().base_url, entry, option);
        self.load(&request, force_refresh)
    }

    /// KEGG `link` operation: cross-references from `source` entries to the
    /// `target` database, as two parallel columns.
    ///
    /// Only `target` is validated; `source` passes through unchecked, the
    /// same asymmetry the upstream API exposes.
    pub fn link(
        &self,
        source: &str,
        target: &str,
        force_refresh: bool,
    ) -> Result<(Vec<String>, Vec<String>)> {
        let request = request::link(&self.config().base_url, self.vocabulary(), source, target)?;
        let text = self.load_text(&request.url, &request.filename, force_refresh)?;
        parse::split_pairs(&text)
    }

    /// All KEGG organism codes, from the `list/organism` endpoint.
    pub fn organism_codes(&self, force_refresh: bool) -> Result<Vec<String>> {
        let request = request::organism(&self.config().base_url);
        let text = self.load_text(&request.url, &request.filename, force_refresh)?;
        parse::parse_organism_codes(&text)
    }

    /// Delete every cached response.
    pub fn purge_cache(&self) -> Result<()> {
        self.store().purge()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::KeggError;
    use tempfile::TempDir;

    // Unreachable base URL: any test that would touch the network fails
    // with an HTTP error instead of silently fetching.
    const UNREACHABLE: &str = "http://127.0.0.1:1";

    fn offline_client() -> (TempDir, KeggClient) {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::with_cache_dir(temp_dir.path()).base_url(UNREACHABLE);
        let client = KeggClient::with_config(config).unwrap();
        (temp_dir, client)
    }

    #[test]
    fn test_list_rejects_before_any_io() {
        let (_dir, client) = offline_client();

        let err = client.list("not-a-real-db", None, false, false).unwrap_err();
        assert!(matches!(err, KeggError::InvalidKey { .. }));

        let err = client
            .list("pathway", Some(ListOption::Xl), false, false)
            .unwrap_err();
        assert!(matches!(err, KeggError::InvalidKey { .. }));
    }

    #[test]
    fn test_list_from_cache() {
        let (_dir, client) = offline_client();
        client
            .store()
            .write_text(
                "pathway__list",
                "path:map00010\tGlycolysis\npath:map00020\tCitrate cycle",
            )
            .unwrap();

        let listing = client.list("pathway", None, true, false).unwrap();
        assert_eq!(listing.entries, vec!["path:map00010", "path:map00020"]);
        assert_eq!(
            listing.descriptions.unwrap(),
            vec!["Glycolysis".to_string(), "Citrate cycle".to_string()]
        );
    }

    #[test]
    fn test_find_from_cache() {
        let (_dir, client) = offline_client();
        client
            .store()
            .write_text("compound_C7H10O5_formula", "cpd:C00493\tC7H10O5")
            .unwrap();

        let listing = client
            .find("compound", "C7H10O5", Some(FindOption::Formula), false, false)
            .unwrap();
        assert_eq!(listing.entries, vec!["cpd:C00493"]);
        assert_eq!(listing.descriptions, None);
    }

    #[test]
    fn test_get_description_from_cache() {
        let (_dir, client) = offline_client();
        client
            .store()
            .write_text("hsa_7422_description", "ENTRY       7422  CDS  T01001")
            .unwrap();

        let content = client.get("hsa:7422", None, false).unwrap();
        assert_eq!(content.as_text(), Some("ENTRY       7422  CDS  T01001"));
    }

    #[test]
    fn test_link_from_cache() {
        let (_dir, client) = offline_client();
        client
            .store()
            .write_text("pathway_hsa_link", "hsa:10458\tpath:hsa04520\nhsa:10458\tpath:hsa04810")
            .unwrap();

        let (sources, targets) = client.link("hsa", "pathway", false).unwrap();
        assert_eq!(sources, vec!["hsa:10458", "hsa:10458"]);
        assert_eq!(targets, vec!["path:hsa04520", "path:hsa04810"]);
    }

    #[test]
    fn test_link_rejects_invalid_target() {
        let (_dir, client) = offline_client();

        let err = client.link("hsa", "bogus-target", false).unwrap_err();
        assert!(matches!(err, KeggError::InvalidKey { .. }));
    }

    #[test]
    fn test_organism_codes_from_cache() {
        let (_dir, client) = offline_client();
        client
            .store()
            .write_text(
                "organism_code_list",
                "T01001\thsa\tHomo sapiens (human)\tEukaryotes;Animals\n\
                 T00005\tsce\tSaccharomyces cerevisiae\tEukaryotes;Fungi",
            )
            .unwrap();

        let codes = client.organism_codes(false).unwrap();
        assert_eq!(codes, vec!["hsa", "sce"]);
    }

    #[test]
    fn test_purge_cache() {
        let (_dir, client) = offline_client();
        client.store().write_text("pathway__list", "a\tb").unwrap();

        client.purge_cache().unwrap();
        assert!(!client.store().exists("pathway__list"));
    }
}

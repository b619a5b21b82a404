//! Image reference resolution.
//!
//! An image field arrives in one of three states: absent, an already-usable
//! absolute URL, or an opaque asset reference that has to be built into a URL
//! by the CDN collaborator. Building a URL from an opaque reference is the
//! one inherently fallible step in the whole normalization path — a reference
//! can be malformed in ways no amount of lenient parsing avoids — so this is
//! the one place where a failure is caught, logged, and degraded to the
//! configured default instead of being structurally impossible.
//!
//! [`resolve_image`] is total: callers never receive an error from it, and
//! its output is always a non-empty URL. Keeping the catch this narrow (one
//! function, one collaborator call) is deliberate — a broad catch around
//! larger logic would hide real bugs behind the default image.
//!
//! ## Reference format
//!
//! Opaque references follow the content store's asset naming scheme:
//!
//! ```text
//! image-<assetId>-<width>x<height>-<format>
//! ```
//!
//! either inline as a string or nested in a reference object under
//! `asset._ref` (the store also emits `asset.ref` and bare `_ref`/`ref`
//! shapes). [`CdnUrlBuilder`] turns that into:
//!
//! ```text
//! <cdn_base_url>/<assetId>-<width>x<height>.<format>
//! ```

use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("asset reference carries no ref string")]
    MissingRef,
    #[error("malformed asset ref '{0}': expected image-<id>-<WxH>-<format>")]
    MalformedRef(String),
}

/// The asset-URL-building collaborator.
///
/// [`resolve_image`] is the sole caller; implementations are free to fail on
/// malformed references and the failure never escapes past resolution.
pub trait AssetUrlBuilder {
    fn build_url(&self, reference: &Value) -> Result<String, AssetError>;
}

/// Builds displayable URLs from opaque asset references against a CDN base.
#[derive(Debug, Clone)]
pub struct CdnUrlBuilder {
    base_url: String,
}

impl CdnUrlBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Pull the ref string out of whatever shape the store nested it in.
    fn ref_string(reference: &Value) -> Result<&str, AssetError> {
        if let Some(s) = reference.as_str() {
            return Ok(s);
        }
        let paths: [&[&str]; 4] = [&["asset", "_ref"], &["asset", "ref"], &["_ref"], &["ref"]];
        for path in paths {
            let mut cursor = reference;
            let mut found = true;
            for key in path {
                match cursor.get(*key) {
                    Some(next) => cursor = next,
                    None => {
                        found = false;
                        break;
                    }
                }
            }
            if found {
                if let Some(s) = cursor.as_str() {
                    return Ok(s);
                }
            }
        }
        Err(AssetError::MissingRef)
    }
}

impl AssetUrlBuilder for CdnUrlBuilder {
    fn build_url(&self, reference: &Value) -> Result<String, AssetError> {
        let raw = Self::ref_string(reference)?;
        let malformed = || AssetError::MalformedRef(raw.to_string());

        let rest = raw.strip_prefix("image-").ok_or_else(malformed)?;
        let (rest, format) = rest.rsplit_once('-').ok_or_else(malformed)?;
        let (asset_id, dims) = rest.rsplit_once('-').ok_or_else(malformed)?;

        let valid_dims = dims
            .split_once('x')
            .is_some_and(|(w, h)| w.parse::<u32>().is_ok() && h.parse::<u32>().is_ok());
        if asset_id.is_empty()
            || !valid_dims
            || format.is_empty()
            || !format.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(malformed());
        }

        Ok(format!("{}/{asset_id}-{dims}.{format}", self.base_url))
    }
}

/// Resolve an image field to a displayable URL.
///
/// Decision procedure, in order:
///
/// 1. absent or empty → `default_url`
/// 2. a string beginning with `http` → returned unchanged
/// 3. anything else → built via the collaborator
/// 4. construction failed or yielded an empty URL → logged, `default_url`
///
/// Total function: never panics, never returns an error, never returns an
/// empty string (assuming `default_url` is non-empty, which config
/// validation guarantees).
pub fn resolve_image(
    source: Option<&crate::raw::RawImage>,
    default_url: &str,
    builder: &impl AssetUrlBuilder,
) -> String {
    use crate::raw::RawImage;

    let reference = match source {
        None => return default_url.to_string(),
        Some(RawImage::Text(s)) if s.trim().is_empty() => return default_url.to_string(),
        Some(RawImage::Text(s)) if s.starts_with("http") => return s.clone(),
        Some(RawImage::Text(s)) => Value::String(s.clone()),
        Some(RawImage::Reference(v)) if v.is_null() => return default_url.to_string(),
        Some(RawImage::Reference(v)) => v.clone(),
    };

    match builder.build_url(&reference) {
        Ok(url) if !url.is_empty() => url,
        Ok(_) => {
            tracing::warn!("asset builder returned an empty URL; using default image");
            default_url.to_string()
        }
        Err(error) => {
            tracing::warn!(%error, "failed to resolve asset reference; using default image");
            default_url.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::RawImage;
    use serde_json::json;

    const DEFAULT: &str = "https://cdn.test/default.jpg";

    fn builder() -> CdnUrlBuilder {
        CdnUrlBuilder::new("https://cdn.test/images")
    }

    // =========================================================================
    // resolve_image decision procedure
    // =========================================================================

    #[test]
    fn absent_source_yields_default() {
        assert_eq!(resolve_image(None, DEFAULT, &builder()), DEFAULT);
    }

    #[test]
    fn empty_string_yields_default() {
        let img = RawImage::Text("".into());
        assert_eq!(resolve_image(Some(&img), DEFAULT, &builder()), DEFAULT);

        let img = RawImage::Text("   ".into());
        assert_eq!(resolve_image(Some(&img), DEFAULT, &builder()), DEFAULT);
    }

    #[test]
    fn null_reference_yields_default() {
        let img = RawImage::Reference(Value::Null);
        assert_eq!(resolve_image(Some(&img), DEFAULT, &builder()), DEFAULT);
    }

    #[test]
    fn absolute_url_passes_through_unchanged() {
        let img = RawImage::Text("http://a/b.png".into());
        assert_eq!(resolve_image(Some(&img), DEFAULT, &builder()), "http://a/b.png");

        let img = RawImage::Text("https://a/b.png".into());
        assert_eq!(resolve_image(Some(&img), DEFAULT, &builder()), "https://a/b.png");
    }

    #[test]
    fn inline_ref_string_is_built() {
        let img = RawImage::Text("image-abc123-800x600-jpg".into());
        assert_eq!(
            resolve_image(Some(&img), DEFAULT, &builder()),
            "https://cdn.test/images/abc123-800x600.jpg"
        );
    }

    #[test]
    fn nested_ref_object_is_built() {
        let img = RawImage::Reference(json!({ "asset": { "_ref": "image-abc123-800x600-jpg" } }));
        assert_eq!(
            resolve_image(Some(&img), DEFAULT, &builder()),
            "https://cdn.test/images/abc123-800x600.jpg"
        );
    }

    #[test]
    fn malformed_refs_degrade_to_default_without_panicking() {
        let shapes = [
            RawImage::Text("not-an-image-ref".into()),
            RawImage::Text("image-".into()),
            RawImage::Text("image-abc123".into()),
            RawImage::Text("image-abc123-800x600".into()),
            RawImage::Text("image-abc123-notdims-jpg".into()),
            RawImage::Reference(json!({ "asset": {} })),
            RawImage::Reference(json!({ "asset": { "_ref": 42 } })),
            RawImage::Reference(json!([1, 2, 3])),
            RawImage::Reference(json!(42)),
        ];
        for shape in &shapes {
            assert_eq!(
                resolve_image(Some(shape), DEFAULT, &builder()),
                DEFAULT,
                "shape {shape:?} should degrade to default"
            );
        }
    }

    // =========================================================================
    // CdnUrlBuilder
    // =========================================================================

    #[test]
    fn builder_trims_trailing_slash_on_base() {
        let b = CdnUrlBuilder::new("https://cdn.test/images/");
        assert_eq!(
            b.build_url(&json!("image-abc-100x200-png")).unwrap(),
            "https://cdn.test/images/abc-100x200.png"
        );
    }

    #[test]
    fn builder_accepts_alternate_ref_nesting() {
        let b = builder();
        for value in [
            json!({ "asset": { "ref": "image-abc-100x200-png" } }),
            json!({ "_ref": "image-abc-100x200-png" }),
            json!({ "ref": "image-abc-100x200-png" }),
        ] {
            assert_eq!(
                b.build_url(&value).unwrap(),
                "https://cdn.test/images/abc-100x200.png"
            );
        }
    }

    #[test]
    fn builder_rejects_missing_ref() {
        assert!(matches!(
            builder().build_url(&json!({ "asset": {} })),
            Err(AssetError::MissingRef)
        ));
    }

    #[test]
    fn builder_rejects_malformed_ref() {
        assert!(matches!(
            builder().build_url(&json!("image-abc-800x600")),
            Err(AssetError::MalformedRef(_))
        ));
        assert!(matches!(
            builder().build_url(&json!("file-abc-800x600-jpg")),
            Err(AssetError::MalformedRef(_))
        ));
    }

    #[test]
    fn builder_keeps_dashed_asset_ids_intact() {
        // Asset ids may themselves contain dashes; dims and format are the
        // last two segments.
        assert_eq!(
            builder()
                .build_url(&json!("image-ab-cd-ef-800x600-webp"))
                .unwrap(),
            "https://cdn.test/images/ab-cd-ef-800x600.webp"
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Avif,
    Webp,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Avif => "avif",
            ImageFormat::Webp => "webp",
        }
    }

    /// A 1x1 image the browser can only decode if it supports the format.
    pub fn probe_uri(self) -> &'static str {
        match self {
            ImageFormat::Avif => "data:image/avif;base64,AAAAIGZ0eXBhdmlmAAAAAGF2aWZtaWYxbWlhZk1BMUIAAADybWV0YQAAAAAAAAAoaGRscgAAAAAAAAAAcGljdAAAAAAAAAAAAAAAAGxpYmF2aWYAAAAADnBpdG0AAAAAAAEAAAAeaWxvYwAAAABEAAABAAEAAAABAAABGgAAAB0AAAAoaWluZgAAAAAAAQAAABppbmZlAgAAAAABAABhdjAxQ29sb3IAAAAAamlwcnAAAABLaXBjbwAAABRpc3BlAAAAAAAAAAIAAAACAAAAEHBpeGkAAAAAAwgICAAAAAxhdjFDgQ0MAAAAABNjb2xybmNseAACAAIAAYAAAAAXaXBtYQAAAAAAAAABAAEEAQKDBAAAACVtZGF0EgAKCBgANogQEAwgMg8f8D///8WfhwB8+ErK42A=",
            ImageFormat::Webp => "data:image/webp;base64,UklGRiIAAABXRUJQVlA4IBYAAAAwAQCdASoBAAEADsD+JaQAA3AAAAAA",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatSupport {
    pub avif: bool,
    pub webp: bool,
}

impl FormatSupport {
    pub fn preferred(self) -> Option<ImageFormat> {
        if self.avif {
            Some(ImageFormat::Avif)
        } else if self.webp {
            Some(ImageFormat::Webp)
        } else {
            None
        }
    }
}

const CONVERTIBLE: [&str; 3] = ["jpg", "jpeg", "png"];

/// Picks the best variant of `src` the browser can decode.
///
/// Only raster originals (jpg, jpeg, png) are swapped; everything else,
/// including sources without an extension, comes back unchanged.
pub fn negotiate(src: &str, support: FormatSupport) -> String {
    let Some(format) = support.preferred() else {
        return src.to_string();
    };

    let suffix_at = src.find(['?', '#']).unwrap_or(src.len());
    let (path, suffix) = src.split_at(suffix_at);
    let file_start = path.rfind('/').map(|i| i + 1).unwrap_or(0);
    let Some(dot) = path[file_start..].rfind('.').map(|i| file_start + i) else {
        return src.to_string();
    };

    let extension = path[dot + 1..].to_ascii_lowercase();
    if dot == file_start || !CONVERTIBLE.contains(&extension.as_str()) {
        return src.to_string();
    }
    format!("{}.{}{}", &path[..dot], format.extension(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const ALL: FormatSupport = FormatSupport { avif: true, webp: true };
    const WEBP: FormatSupport = FormatSupport { avif: false, webp: true };
    const NONE: FormatSupport = FormatSupport { avif: false, webp: false };

    #[rstest]
    #[case("/assets/kitchen-before.jpg", ALL, "/assets/kitchen-before.avif")]
    #[case("/assets/kitchen-before.jpg", WEBP, "/assets/kitchen-before.webp")]
    #[case("/assets/kitchen-before.jpg", NONE, "/assets/kitchen-before.jpg")]
    #[case("/assets/Team.PNG", WEBP, "/assets/Team.webp")]
    #[case("/assets/hero.jpeg?v=3#top", ALL, "/assets/hero.avif?v=3#top")]
    fn swaps_raster_extensions(
        #[case] src: &str,
        #[case] support: FormatSupport,
        #[case] expected: &str,
    ) {
        assert_eq!(negotiate(src, support), expected);
    }

    #[rstest]
    #[case("/assets/logo.svg")]
    #[case("/assets/spinner.gif")]
    #[case("/assets/already.webp")]
    #[case("/assets/already.avif")]
    #[case("/assets/no-extension")]
    #[case("/assets.v2/no-extension")]
    #[case("/assets/.hidden")]
    #[case("https://cdn.example.com/photo?format=jpg")]
    fn leaves_other_sources_alone(#[case] src: &str) {
        assert_eq!(negotiate(src, ALL), src);
    }

    #[test]
    fn avif_beats_webp() {
        assert_eq!(ALL.preferred(), Some(ImageFormat::Avif));
        assert_eq!(WEBP.preferred(), Some(ImageFormat::Webp));
        assert_eq!(NONE.preferred(), None);
    }
}

//! Content-type to file extension table.

/// Look up the canonical extension (without the dot) for a content type.
///
/// Matching ignores case, surrounding whitespace and parameters such as
/// `; charset=utf-8`. Returns `None` for unrecognized types.
#[must_use]
pub fn extension_for_mime(mime_type: &str) -> Option<&'static str> {
    let essence = mime_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    let ext = match essence.as_str() {
        // Images
        "image/png" | "image/apng" => "png",
        "image/jpeg" | "image/pjpeg" | "image/jpg" => "jpg",
        "image/gif" => "gif",
        "image/webp" => "webp",
        "image/avif" => "avif",
        "image/bmp" | "image/x-ms-bmp" => "bmp",
        "image/svg+xml" => "svg",
        "image/tiff" => "tif",
        "image/x-icon" | "image/vnd.microsoft.icon" => "ico",
        "image/heic" => "heic",
        "image/heif" => "heif",
        "image/jxl" => "jxl",
        "image/jp2" => "jp2",
        "image/vnd.adobe.photoshop" => "psd",
        "image/x-xcf" => "xcf",
        "image/x-canon-cr2" => "cr2",
        "image/x-nikon-nef" => "nef",
        "image/x-adobe-dng" => "dng",
        "image/vnd.djvu" => "djvu",

        // Video
        "video/mp4" => "mp4",
        "video/webm" => "webm",
        "video/x-matroska" => "mkv",
        "video/quicktime" => "mov",
        "video/x-msvideo" => "avi",
        "video/x-ms-wmv" => "wmv",
        "video/x-flv" => "flv",
        "video/mpeg" => "mpg",
        "video/3gpp" => "3gp",
        "video/3gpp2" => "3g2",
        "video/ogg" => "ogv",
        "video/mp2t" => "ts",
        "video/x-m4v" => "m4v",

        // Audio
        "audio/mpeg" | "audio/mp3" => "mp3",
        "audio/mp4" | "audio/x-m4a" => "m4a",
        "audio/aac" => "aac",
        "audio/ogg" => "ogg",
        "audio/opus" => "opus",
        "audio/wav" | "audio/x-wav" | "audio/wave" => "wav",
        "audio/flac" | "audio/x-flac" => "flac",
        "audio/webm" => "weba",
        "audio/midi" | "audio/x-midi" => "mid",
        "audio/aiff" | "audio/x-aiff" => "aif",
        "audio/amr" => "amr",
        "audio/x-ms-wma" => "wma",
        "audio/x-ape" => "ape",

        // Documents and text
        "application/pdf" => "pdf",
        "application/postscript" => "ps",
        "application/rtf" | "text/rtf" => "rtf",
        "application/msword" => "doc",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => "docx",
        "application/vnd.ms-excel" => "xls",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => "xlsx",
        "application/vnd.ms-powerpoint" => "ppt",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation" => "pptx",
        "application/vnd.oasis.opendocument.text" => "odt",
        "application/vnd.oasis.opendocument.spreadsheet" => "ods",
        "application/vnd.oasis.opendocument.presentation" => "odp",
        "application/epub+zip" => "epub",
        "application/x-mobipocket-ebook" => "mobi",
        "application/vnd.amazon.ebook" => "azw",
        "text/plain" => "txt",
        "text/html" => "html",
        "text/css" => "css",
        "text/csv" => "csv",
        "text/tab-separated-values" => "tsv",
        "text/markdown" => "md",
        "text/calendar" => "ics",
        "text/vcard" => "vcf",
        "text/xml" | "application/xml" => "xml",
        "text/javascript" | "application/javascript" => "js",
        "application/json" => "json",
        "application/ld+json" => "jsonld",
        "application/x-yaml" | "application/yaml" | "text/yaml" => "yaml",
        "application/toml" => "toml",
        "application/x-latex" => "latex",
        "application/x-tex" => "tex",
        "application/wasm" => "wasm",

        // Archives and packages
        "application/zip" | "application/x-zip-compressed" => "zip",
        "application/gzip" | "application/x-gzip" => "gz",
        "application/x-tar" => "tar",
        "application/x-bzip2" => "bz2",
        "application/x-xz" => "xz",
        "application/zstd" => "zst",
        "application/x-lzip" => "lz",
        "application/x-7z-compressed" => "7z",
        "application/vnd.rar" | "application/x-rar-compressed" => "rar",
        "application/x-iso9660-image" => "iso",
        "application/x-apple-diskimage" => "dmg",
        "application/vnd.debian.binary-package" => "deb",
        "application/x-rpm" => "rpm",
        "application/vnd.android.package-archive" => "apk",
        "application/java-archive" => "jar",
        "application/x-msi" => "msi",
        "application/x-msdownload" | "application/vnd.microsoft.portable-executable" => "exe",
        "application/x-cab" | "application/vnd.ms-cab-compressed" => "cab",
        "application/x-xar" => "xar",
        "application/x-shockwave-flash" => "swf",

        // Fonts
        "font/ttf" | "application/x-font-ttf" => "ttf",
        "font/otf" | "application/x-font-otf" => "otf",
        "font/woff" | "application/font-woff" => "woff",
        "font/woff2" => "woff2",
        "font/collection" => "ttc",
        "application/vnd.ms-fontobject" => "eot",

        // 3-D models
        "model/gltf+json" => "gltf",
        "model/gltf-binary" => "glb",
        "model/obj" => "obj",
        "model/stl" | "model/x.stl-binary" | "application/sla" => "stl",
        "model/3mf" => "3mf",
        "model/vnd.collada+xml" => "dae",
        "model/vnd.usdz+zip" => "usdz",
        "model/x3d+xml" => "x3d",
        "model/vrml" => "wrl",
        "model/iges" => "igs",
        "model/step" => "step",
        "application/x-blender" => "blend",

        // Scientific
        "application/x-hdf" => "hdf",
        "application/x-hdf5" => "h5",
        "application/x-netcdf" | "application/netcdf" => "nc",
        "application/fits" | "image/fits" => "fits",
        "chemical/x-pdb" => "pdb",
        "chemical/x-xyz" => "xyz",
        "chemical/x-cif" => "cif",
        "chemical/x-mdl-molfile" => "mol",
        "application/x-matlab-data" => "mat",
        "application/x-ipynb+json" => "ipynb",
        "application/vnd.apache.parquet" | "application/x-parquet" => "parquet",
        "application/x-npy" => "npy",
        "application/dicom" => "dcm",

        // Databases
        "application/vnd.sqlite3" | "application/x-sqlite3" => "sqlite",
        "application/x-msaccess" | "application/vnd.ms-access" => "mdb",
        "application/sql" => "sql",
        "application/x-dbf" => "dbf",

        _ => return None,
    };

    Some(ext)
}

//! Integration tests for swatch crates.
//!
//! End-to-end runs over temporary project trees: source documents are
//! normalized, the catalog is reconciled, and new entries are written.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::path::{Path, PathBuf};

    use swatch_catalog::{
        AssetLifecycleType, AssetReconciler, CatalogLayout, Generator, HexNamer, Provenance, RunReport,
        StoredColor, SwatchConfig,
    };
    use swatch_color::ColorSpaceConverter;
    use swatch_core::CanonicalColor;
    use tempfile::tempdir;

    const MAIN_STORYBOARD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<document type="com.apple.InterfaceBuilder3.CocoaTouch.Storyboard.XIB" version="3.0">
    <scenes>
        <scene sceneID="s1">
            <objects>
                <view key="view" id="v1">
                    <color key="textColor" cocoaTouchSystemColor="darkTextColor"/>
                    <color key="tintColor" red="1" green="0.0" blue="0.0" alpha="1" colorSpace="custom" customColorSpace="sRGB"/>
                    <color key="shadowColor" cyan="0" magenta="0" yellow="0" black="1" alpha="1" colorSpace="deviceCMYK"/>
                    <color key="borderColor" white="0.25" alpha="1" colorSpace="deviceWhite"/>
                    <color key="backgroundColor" white="1" alpha="1" colorSpace="custom" customColorSpace="genericGamma22GrayColorSpace"/>
                </view>
            </objects>
        </scene>
    </scenes>
</document>
"#;

    const SETTINGS_STORYBOARD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<document>
    <view key="view" id="v2">
        <color key="textColor" cocoaTouchSystemColor="lightTextColor"/>
        <color key="labelColor" catalog="System" name="labelColor" colorSpace="catalog"/>
    </view>
</document>
"#;

    fn project() -> (tempfile::TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let root = dir.path().to_path_buf();
        fs::create_dir_all(root.join("App/Base.lproj")).unwrap();
        fs::write(root.join("App/Base.lproj/Main.storyboard"), MAIN_STORYBOARD).unwrap();
        fs::write(root.join("App/Settings.storyboard"), SETTINGS_STORYBOARD).unwrap();
        (dir, root)
    }

    fn run(root: &Path) -> RunReport {
        let config = SwatchConfig::load_for(root, None).unwrap();
        Generator::new(config).run(root, &HexNamer).unwrap()
    }

    fn entry_names(catalog: &Path) -> BTreeSet<String> {
        let layout = CatalogLayout::default();
        layout
            .list_entries(catalog)
            .unwrap()
            .paths
            .iter()
            .filter_map(|e| layout.entry_name(e))
            .collect()
    }

    #[test]
    fn test_first_run_creates_catalog() {
        let (_dir, root) = project();
        let report = run(&root);
        assert!(report.is_complete());
        assert_eq!(report.documents_rewritten.len(), 2);

        let catalog = root.join("Colors.xcassets");
        assert_eq!(report.catalog_root, catalog);
        // darkText and CMYK black coincide; the unresolved catalog color is skipped.
        assert_eq!(
            entry_names(&catalog),
            BTreeSet::from(
                ["Color000000", "Color404040", "ColorFF0000", "ColorFFFFFF", "ColorFFFFFFA60"].map(String::from)
            )
        );

        let main = fs::read_to_string(root.join("App/Base.lproj/Main.storyboard")).unwrap();
        assert!(!main.contains("cocoaTouchSystemColor"));
        assert!(!main.contains("deviceCMYK"));
        let settings = fs::read_to_string(root.join("App/Settings.storyboard")).unwrap();
        assert!(settings.contains(r#"colorSpace="catalog""#));
    }

    #[test]
    fn test_second_run_is_stable() {
        let (_dir, root) = project();
        let first = run(&root);
        let catalog = first.catalog_root.clone();
        let names = entry_names(&catalog);
        let main = fs::read_to_string(root.join("App/Base.lproj/Main.storyboard")).unwrap();

        let second = run(&root);
        assert!(second.is_complete());
        assert_eq!(second.deleted.len(), first.created.len());
        assert_eq!(second.created.len(), first.created.len());
        assert!(second.documents_rewritten.is_empty());
        assert_eq!(entry_names(&catalog), names);
        assert_eq!(fs::read_to_string(root.join("App/Base.lproj/Main.storyboard")).unwrap(), main);
    }

    #[test]
    fn test_user_rename_survives_and_holds_color() {
        let (_dir, root) = project();
        let catalog = run(&root).catalog_root;
        fs::rename(catalog.join("ColorFF0000.colorset"), catalog.join("Brand.colorset")).unwrap();

        let report = run(&root);
        assert!(report.is_complete());
        assert_eq!(report.provenance_updated, vec![catalog.join("Brand.colorset")]);
        assert_eq!(report.preserved, 1);

        let names = entry_names(&catalog);
        assert!(names.contains("Brand"));
        assert!(!names.contains("ColorFF0000"));
        assert_eq!(
            Provenance::read(&catalog.join("Brand.colorset/provenance.json")),
            Some(Provenance::user("Brand"))
        );

        let reconciler = AssetReconciler::new(CatalogLayout::default());
        let brand = reconciler.record(&catalog.join("Brand.colorset"));
        assert_eq!(brand.lifecycle, AssetLifecycleType::CustomUnmodified);
        assert_eq!(brand.color, CanonicalColor::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_user_entry_reserves_its_name() {
        let (_dir, root) = project();
        let catalog = root.join("App/Assets.xcassets");
        let user_entry = catalog.join("ColorFFFFFF.colorset");
        fs::create_dir_all(&user_entry).unwrap();
        fs::write(
            user_entry.join("Contents.json"),
            r#"{"colors":[{"idiom":"universal","color":{"color-space":"srgb","components":{"red":"0x12","green":"0x34","blue":"0x56","alpha":"1.000"}}}]}"#,
        )
        .unwrap();

        let report = run(&root);
        assert!(report.is_complete());
        assert_eq!(report.catalog_root, catalog);

        let names = entry_names(&catalog);
        // The user entry keeps the name, so generated white moves aside.
        assert!(names.contains("ColorFFFFFF"));
        assert!(names.contains("ColorFFFFFF-2"));
        assert_eq!(
            fs::read_to_string(user_entry.join("provenance.json")).unwrap(),
            r#"{"name":"ColorFFFFFF","custom":true}"#
        );
    }

    #[test]
    fn test_user_entry_color_is_not_duplicated() {
        let (_dir, root) = project();
        let catalog = root.join("Colors.xcassets");
        let user_entry = catalog.join("Ink.colorset");
        fs::create_dir_all(&user_entry).unwrap();
        fs::write(
            user_entry.join("Contents.json"),
            r#"{"colors":[{"color":{"color-space":"srgb","components":{"red":"0","green":"0","blue":"0","alpha":"1.000"}}}]}"#,
        )
        .unwrap();

        run(&root);
        let names = entry_names(&catalog);
        assert!(names.contains("Ink"));
        assert!(!names.contains("Color000000"));
    }

    #[test]
    fn test_catalog_colors_from_config() {
        let (_dir, root) = project();
        fs::write(
            root.join("swatch.yaml"),
            "named_colors:\n  - { catalog: System, name: labelColor, red: 0, green: 0, blue: 0, alpha: 0.85 }\n",
        )
        .unwrap();

        let report = run(&root);
        assert!(report.is_complete());
        assert!(entry_names(&report.catalog_root).contains("Color000000A85"));
        let settings = fs::read_to_string(root.join("App/Settings.storyboard")).unwrap();
        assert!(!settings.contains(r#"colorSpace="catalog""#));
        assert!(settings.contains(r#"alpha="0.85""#));
    }

    #[test]
    fn test_written_entries_decode_to_document_colors() {
        let (_dir, root) = project();
        let report = run(&root);
        let converter = ColorSpaceConverter::new();
        let layout = CatalogLayout::default();
        let decoded: BTreeSet<CanonicalColor> = report
            .created
            .iter()
            .map(|entry| StoredColor::read(&layout.contents_path(entry)).decode(&converter))
            .collect();
        assert!(decoded.contains(&CanonicalColor::new(0.25, 0.25, 0.25, 1.0)));
        assert!(decoded.contains(&CanonicalColor::new(1.0, 1.0, 1.0, 0.6)));
        assert!(decoded.contains(&CanonicalColor::WHITE));
    }

    #[test]
    fn test_vendored_documents_are_ignored() {
        let (_dir, root) = project();
        fs::create_dir_all(root.join("Pods/Lib")).unwrap();
        let vendored = r#"<document><color key="k" white="0.5" alpha="1" colorSpace="deviceWhite"/></document>"#;
        fs::write(root.join("Pods/Lib/Lib.storyboard"), vendored).unwrap();

        let report = run(&root);
        assert_eq!(fs::read_to_string(root.join("Pods/Lib/Lib.storyboard")).unwrap(), vendored);
        assert!(!entry_names(&report.catalog_root).contains("Color808080"));
    }

    #[test]
    fn test_plan_is_read_only() {
        let (_dir, root) = project();
        let plan = Generator::new(SwatchConfig::default()).plan(&root).unwrap();
        assert_eq!(plan.colors().len(), 5);
        assert!(!plan.catalog_root().exists());
        assert_eq!(
            fs::read_to_string(root.join("App/Base.lproj/Main.storyboard")).unwrap(),
            MAIN_STORYBOARD
        );
    }

    #[test]
    fn test_inspect_json_shape() {
        let (_dir, root) = project();
        let catalog = run(&root).catalog_root;
        let records = AssetReconciler::new(CatalogLayout::default()).scan(&catalog).unwrap();
        let json = serde_json::to_value(&records).unwrap();
        assert_eq!(json[0]["lifecycle"], "original");
        assert!(json[0]["currentName"].is_string());
        assert!(json[0]["color"].is_object());
    }
}

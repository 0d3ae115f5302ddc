//! Normalization of a realistic storyboard.

use swatch_color::ColorSpaceConverter;
use swatch_core::CanonicalColor;
use swatch_source::normalize_storyboard;

const STORYBOARD: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<document type="com.apple.InterfaceBuilder3.CocoaTouch.Storyboard.XIB" version="3.0" toolsVersion="14113" targetRuntime="iOS.CocoaTouch" propertyAccessControl="none" useAutolayout="YES" useTraitCollections="YES" useSafeAreas="YES" colorMatched="YES" initialViewController="BYZ-38-t0r">
    <scenes>
        <scene sceneID="tne-QT-ifu">
            <objects>
                <viewController id="BYZ-38-t0r" customClass="ViewController" customModule="Demo" sceneMemberID="viewController">
                    <view key="view" contentMode="scaleToFill" id="8bC-Xf-vdC">
                        <subviews>
                            <label opaque="NO" text="Hello &amp; welcome" id="dKx-1c-2Xa">
                                <color key="textColor" cocoaTouchSystemColor="darkTextColor"/>
                                <nil key="highlightedColor"/>
                            </label>
                        </subviews>
                        <color key="backgroundColor" red="1" green="1" blue="1" alpha="1" colorSpace="custom" customColorSpace="sRGB"/>
                        <color key="tintColor" red="0.2" green="0.4" blue="0.6" alpha="1" colorSpace="custom" customColorSpace="displayP3"/>
                        <color key="shadowColor" cyan="0" magenta="0" yellow="0" black="1" alpha="0.5" colorSpace="deviceCMYK"/>
                        <color key="borderColor" white="0.5" alpha="1" colorSpace="custom" customColorSpace="genericGamma22GrayColorSpace"/>
                        <color key="weird" red="0" green="0" blue="0" alpha="1" colorSpace="custom" customColorSpace="LabColorSpace"/>
                    </view>
                </viewController>
            </objects>
        </scene>
    </scenes>
</document>
"#;

#[test]
fn test_realistic_storyboard_is_normalized() {
    let scan = normalize_storyboard(STORYBOARD, &ColorSpaceConverter::new()).unwrap();

    // Five recognized colors; the Lab one is skipped.
    assert_eq!(scan.colors.len(), 5);
    assert_eq!(scan.converted, 4);
    assert_eq!(scan.colors[0], CanonicalColor::new(0.0, 0.0, 0.0, 1.0));
    assert_eq!(scan.colors[1], CanonicalColor::WHITE);
    assert_eq!(scan.colors[3], CanonicalColor::new(0.0, 0.0, 0.0, 0.5));

    let out = scan.rewritten.as_deref().unwrap();
    assert!(!out.contains("cocoaTouchSystemColor"));
    assert!(!out.contains("displayP3"));
    assert!(!out.contains("deviceCMYK"));
    assert!(!out.contains("cyan="));
    assert!(!out.contains("white="));
    // Untouched content survives exactly.
    assert!(out.contains(r#"<label opaque="NO" text="Hello &amp; welcome" id="dKx-1c-2Xa">"#));
    assert!(out.contains(r#"<nil key="highlightedColor"/>"#));
    assert!(out.contains(
        r#"<color key="backgroundColor" red="1" green="1" blue="1" alpha="1" colorSpace="custom" customColorSpace="sRGB"/>"#
    ));
    assert!(out.contains(r#"customColorSpace="LabColorSpace"/>"#));
    assert_eq!(out.lines().count(), STORYBOARD.lines().count());
}

#[test]
fn test_normalized_storyboard_is_a_fixed_point() {
    let converter = ColorSpaceConverter::new();
    let first = normalize_storyboard(STORYBOARD, &converter).unwrap();
    let text = first.rewritten.clone().unwrap();
    let second = normalize_storyboard(&text, &converter).unwrap();
    assert!(!second.is_modified());
    assert_eq!(second.colors, first.colors);
}

//! 미디어 (media & OTT streaming) preset.
//!
//! The only preset with a filled secondary button background and the
//! thumbnail/poster aspect-ratio snippets.

use std::collections::BTreeMap;

use crate::color::generate_color_scale;
use crate::spec::*;

pub fn media_preset(tone: BrandTone) -> DesignSystemSpec {
    DesignSystemSpec {
        meta: Meta {
            industry: "미디어".to_string(),
            brand_tone: tone.as_str().to_string(),
            style_keywords: strings(&["콘텐츠", "몰입", "스트리밍", "엔터테인먼트", "시청"]),
            target_feeling: "다양한 콘텐츠를 쉽게 탐색하고 바로 시청할 수 있는 몰입형 경험".to_string(),
        },

        figma_guide: FigmaGuide {
            pages: strings(&[
                "🎨 Design System",
                "🎬 Content Grid",
                "▶️ Video Player",
                "📱 Mobile Streaming",
                "👤 User Profile",
            ]),
            naming_rule: "Component/ContentType/State (예: ThumbnailCard/Series/Playing)".to_string(),
            auto_layout_rules: AutoLayoutRules {
                grid: "24-column fluid grid, 12px gutter".to_string(),
                spacing_scale: vec![4, 8, 12, 16, 20, 24, 32, 40, 48],
                radius_scale: vec![4, 6, 8, 12, 16],
                type_scale_tokens: strings(&[
                    "text-xs", "text-sm", "text-base", "text-lg", "text-xl", "text-2xl",
                    "text-3xl", "text-4xl",
                ]),
                breakpoints: strings(&[
                    "mobile: 375px",
                    "tablet: 768px",
                    "desktop: 1280px",
                    "tv: 1920px",
                ]),
            },
        },

        layout: Layout {
            header: LayoutHeader {
                height_px: 68,
                structure: strings(&[
                    "Logo", "Home", "TV Shows", "Movies", "My List", "Search", "Profile",
                ]),
                sticky_behavior: "transparent to solid on scroll (Netflix-style)".to_string(),
                desktop: HeaderDesktop {
                    padding_x: "px-8 lg:px-12".to_string(),
                    max_width: "max-w-[1920px]".to_string(),
                    nav_items: 7,
                },
                mobile: HeaderMobile {
                    pattern: "Bottom tabs for content categories".to_string(),
                    height_px: 56,
                },
                tailwind_example: "bg-black/90 backdrop-blur-sm text-white sticky top-0 z-50 h-17 flex items-center justify-between px-8 transition-all".to_string(),
            },

            hero: LayoutHero {
                structure: strings(&[
                    "Featured Content Banner",
                    "Play Button",
                    "Add to List",
                    "Content Info",
                    "Genres",
                ]),
                desktop_grid: "Full-width cinematic banner".to_string(),
                mobile_stack: "vertical with prominent play button".to_string(),
                padding: "py-0 (full-bleed)".to_string(),
                background: "Content thumbnail with gradient overlay".to_string(),
                image_style: "16:9 cinematic stills, dramatic scenes".to_string(),
                tailwind_example: "relative h-[80vh] bg-cover bg-center flex items-end pb-20 px-12".to_string(),
            },

            footer: LayoutFooter {
                structure: strings(&["Help", "Account", "Press", "Legal"]),
                legal_items: strings(&["이용약관", "개인정보처리방침", "콘텐츠 이용약관", "쿠키 설정"]),
                tailwind_example: "bg-black text-gray-500 py-16 px-8 mt-20".to_string(),
            },

            sections: vec![
                Section::new(
                    "Continue Watching",
                    "시청 중인 콘텐츠 이어보기",
                    "Horizontal scroll with progress bars",
                    "py-12 px-8 lg:px-12 overflow-x-auto flex gap-4",
                ),
                Section::new(
                    "Trending Now",
                    "인기 콘텐츠 추천",
                    "Large thumbnail grid",
                    "py-12 px-8 lg:px-12 grid grid-cols-2 md:grid-cols-6 gap-4",
                ),
                Section::new(
                    "My List",
                    "사용자 저장 목록",
                    "Horizontal scroll",
                    "py-12 px-8 lg:px-12 overflow-x-auto flex gap-4",
                ),
                Section::new(
                    "Recommended for You",
                    "개인화 추천",
                    "Multiple horizontal rows by genre",
                    "py-12 px-8 lg:px-12 space-y-12",
                ),
                Section::new(
                    "Top 10 in Korea",
                    "실시간 인기 순위",
                    "Numbered thumbnail grid",
                    "py-12 px-8 lg:px-12 grid grid-cols-2 md:grid-cols-5 gap-4",
                ),
            ],
        },

        colors: Colors {
            primary: generate_color_scale("#E50914"),
            secondary: generate_color_scale("#8B5CF6"),
            gray: generate_color_scale("#18181B"),
            usage_rules: UsageRules {
                primary_use: "Play, Add to List, primary CTAs".to_string(),
                secondary_use: "Premium badges, special content".to_string(),
                surface_bg: "black for immersive dark theme".to_string(),
                border: "gray-800 for subtle separation".to_string(),
                text_strong: "white on dark".to_string(),
                text_weak: "gray-400 for metadata".to_string(),
            },
            accessibility_notes: strings(&[
                "자막 옵션 필수 제공",
                "비디오 컨트롤은 키보드 네비게이션 지원",
                "썸네일 위 텍스트는 명확한 대비",
            ]),
        },

        typography: Typography {
            font_family: FontFamily {
                primary: "Pretendard".to_string(),
                fallback: "system-ui".to_string(),
                alt_suggestion: "Netflix Sans 또는 Montserrat".to_string(),
            },
            scale: TypeScale {
                h1: TypographyScale::new("48px", 700, "1.1", "-0.02em"),
                h2: TypographyScale::new("32px", 600, "1.2", "-0.01em"),
                h3: TypographyScale::new("24px", 600, "1.3", "0"),
                body: TypographyScale::new("16px", 400, "1.6", "0"),
                caption: TypographyScale::new("14px", 400, "1.5", "0"),
            },
        },

        components: Components {
            button: ButtonSet {
                primary: PrimaryButton {
                    height_px: 48,
                    padding: "px-8 py-3".to_string(),
                    radius: "rounded-md".to_string(),
                    bg: "bg-white".to_string(),
                    text: "text-black font-bold text-base".to_string(),
                    hover: "hover:bg-gray-200 transition-colors duration-200".to_string(),
                    disabled: "disabled:bg-gray-600".to_string(),
                    tailwind: "bg-white text-black font-bold text-base px-8 py-3 rounded-md hover:bg-gray-200 transition-colors inline-flex items-center gap-2".to_string(),
                },
                secondary: SecondaryButton {
                    height_px: 48,
                    padding: "px-8 py-3".to_string(),
                    radius: "rounded-md".to_string(),
                    border: "border-0".to_string(),
                    bg: Some("bg-gray-700/80".to_string()),
                    text: "text-white font-semibold text-base".to_string(),
                    hover: "hover:bg-gray-600/80 transition-colors duration-200".to_string(),
                    disabled: "disabled:bg-gray-800".to_string(),
                    tailwind: "bg-gray-700/80 text-white font-semibold text-base px-8 py-3 rounded-md hover:bg-gray-600/80 transition-colors inline-flex items-center gap-2".to_string(),
                },
            },
            input: Input {
                height_px: 48,
                radius: "rounded-md".to_string(),
                border: "border border-gray-700".to_string(),
                placeholder: "placeholder:text-gray-500".to_string(),
                focus_ring: "focus:ring-2 focus:ring-primary-500 focus:border-primary-500 bg-gray-900".to_string(),
                tailwind: "w-full h-12 px-4 bg-gray-900 text-white border border-gray-700 rounded-md focus:ring-2 focus:ring-primary-500".to_string(),
            },
            card: Card {
                radius: "rounded-lg".to_string(),
                padding: "p-0".to_string(),
                shadow: "shadow-none hover:scale-105 transition-transform duration-300".to_string(),
                border: "border-0".to_string(),
                tailwind: "bg-transparent rounded-lg overflow-hidden hover:scale-105 transition-transform duration-300 cursor-pointer".to_string(),
            },
        },

        tailwind_mapping: TailwindMapping {
            tailwind_config_extend: TailwindConfigExtend {
                colors: TailwindColors {
                    primary: "colors.primary".to_string(),
                    secondary: "colors.secondary".to_string(),
                    gray: "colors.gray".to_string(),
                },
                font_family: TailwindFontFamily {
                    sans: strings(&["Pretendard", "system-ui"]),
                },
                aspect_ratio: Some(BTreeMap::from([
                    ("16/9".to_string(), "16 / 9".to_string()),
                    ("2/3".to_string(), "2 / 3".to_string()),
                ])),
            },
            class_snippets: ClassSnippets {
                container: "max-w-[1920px] mx-auto px-8 lg:px-12".to_string(),
                header: "bg-black/90 backdrop-blur-sm text-white sticky top-0 z-50 h-17 flex items-center justify-between px-8 transition-all".to_string(),
                hero: "relative h-[80vh] bg-cover bg-center flex items-end pb-20 px-12".to_string(),
                primary_button: "bg-white text-black font-bold text-base px-8 py-3 rounded-md hover:bg-gray-200 transition-colors inline-flex items-center gap-2".to_string(),
                secondary_button: "bg-gray-700/80 text-white font-semibold text-base px-8 py-3 rounded-md hover:bg-gray-600/80 transition-colors inline-flex items-center gap-2".to_string(),
                card: "bg-transparent rounded-lg overflow-hidden hover:scale-105 transition-transform duration-300 cursor-pointer".to_string(),
                input: "w-full h-12 px-4 bg-gray-900 text-white border border-gray-700 rounded-md focus:ring-2 focus:ring-primary-500".to_string(),
                thumbnail: Some("aspect-video rounded-lg overflow-hidden".to_string()),
                poster: Some("aspect-[2/3] rounded-lg overflow-hidden".to_string()),
            },
            implementation_notes: strings(&[
                "비디오 플레이어는 HLS/DASH 스트리밍",
                "Thumbnail lazy loading + intersection observer",
                "Horizontal scroll은 스냅 포인트 활용",
                "Progress bar는 정확한 재생 위치 표시",
            ]),
        },

        variation_summary: VariationSummary {
            changed_points: vec![
                VariationPoint::new(
                    "Colors",
                    "완전한 다크 테마 (black)",
                    "영상 시청에 최적화. 콘텐츠에 집중",
                ),
                VariationPoint::new(
                    "Layout",
                    "Horizontal scroll rows",
                    "Netflix 패턴. 많은 콘텐츠를 효율적으로 표시",
                ),
                VariationPoint::new(
                    "Components",
                    "Thumbnail aspect ratio (16:9, 2:3)",
                    "영상/포스터 비율에 맞춤",
                ),
                VariationPoint::new(
                    "Interaction",
                    "Scale on hover (scale-105)",
                    "썸네일 hover 피드백. 시각적 흥미",
                ),
            ],
            unchanged_principles: strings(&[
                "반응형 grid 시스템",
                "접근성 기준 준수",
                "Mobile-first 접근",
                "일관된 spacing",
            ]),
        },
    }
}

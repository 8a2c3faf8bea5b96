//! 자동차 (automotive) preset.

use crate::color::generate_color_scale;
use crate::spec::*;

pub fn automotive_preset(tone: BrandTone) -> DesignSystemSpec {
    DesignSystemSpec {
        meta: Meta {
            industry: "자동차".to_string(),
            brand_tone: tone.as_str().to_string(),
            style_keywords: strings(&["성능", "혁신", "정밀", "파워", "미래"]),
            target_feeling: "첨단 기술과 성능에 대한 기대감을 주는 역동적이고 정밀한 경험".to_string(),
        },

        figma_guide: FigmaGuide {
            pages: strings(&[
                "🎨 Design System",
                "🚗 Vehicle Showcase",
                "🔧 Spec Comparison",
                "📱 Mobile Configurator",
                "🛠️ Service Booking",
            ]),
            naming_rule: "Component/Category/State (예: VehicleCard/SUV/Featured)".to_string(),
            auto_layout_rules: AutoLayoutRules {
                grid: "12-column grid, 24px gutter".to_string(),
                spacing_scale: vec![4, 8, 12, 16, 20, 24, 32, 40, 48, 64, 80],
                radius_scale: vec![4, 8, 12, 16, 20],
                type_scale_tokens: strings(&[
                    "text-xs", "text-sm", "text-base", "text-lg", "text-xl", "text-2xl",
                    "text-3xl", "text-4xl", "text-5xl",
                ]),
                breakpoints: strings(&[
                    "mobile: 375px",
                    "tablet: 768px",
                    "desktop: 1440px",
                    "wide: 1920px",
                ]),
            },
        },

        layout: Layout {
            header: LayoutHeader {
                height_px: 72,
                structure: strings(&[
                    "Logo",
                    "Models",
                    "Technology",
                    "Financing",
                    "Test Drive",
                    "Dealers",
                ]),
                sticky_behavior: "sticky with dark background".to_string(),
                desktop: HeaderDesktop {
                    padding_x: "px-8 lg:px-12".to_string(),
                    max_width: "max-w-[1920px]".to_string(),
                    nav_items: 6,
                },
                mobile: HeaderMobile {
                    pattern: "Minimal with model selector".to_string(),
                    height_px: 64,
                },
                tailwind_example: "bg-gray-900 text-white border-b border-gray-800 sticky top-0 z-50 h-18 flex items-center justify-between px-8".to_string(),
            },

            hero: LayoutHero {
                structure: strings(&[
                    "360° Vehicle View",
                    "Model Name",
                    "Key Specs",
                    "Configure & Price",
                ]),
                desktop_grid: "Full-width with interactive 3D".to_string(),
                mobile_stack: "vertical with swipeable gallery".to_string(),
                padding: "py-0 (immersive full-screen)".to_string(),
                background: "Dark studio photography or 3D renders".to_string(),
                image_style: "High-end automotive photography, dramatic lighting".to_string(),
                tailwind_example: "relative h-screen bg-gradient-to-b from-gray-900 to-black flex items-center justify-center".to_string(),
            },

            footer: LayoutFooter {
                structure: strings(&["Models", "Services", "Company", "Support"]),
                legal_items: strings(&["이용약관", "개인정보처리방침", "환경정보", "보증정책"]),
                tailwind_example: "bg-black text-gray-400 py-20 px-8 mt-24".to_string(),
            },

            sections: vec![
                Section::new(
                    "Model Lineup",
                    "전체 차종 소개",
                    "Large cards with model photos",
                    "py-24 px-8 grid md:grid-cols-3 gap-12",
                ),
                Section::new(
                    "Key Features",
                    "주요 기술 강조",
                    "Icon + text grid with animations",
                    "bg-gray-50 py-24 px-8 grid md:grid-cols-4 gap-8",
                ),
                Section::new(
                    "Performance Specs",
                    "성능 수치 강조",
                    "Large numbers with comparisons",
                    "bg-black text-white py-24 px-8",
                ),
                Section::new(
                    "Configurator",
                    "맞춤 설정 유도",
                    "Interactive options with live preview",
                    "py-24 px-8 grid md:grid-cols-2 gap-16",
                ),
                Section::new(
                    "Test Drive CTA",
                    "시승 신청 유도",
                    "Full-width with form",
                    "bg-gradient-to-r from-gray-800 to-gray-900 py-24 px-8 text-white",
                ),
            ],
        },

        colors: Colors {
            primary: generate_color_scale("#DC2626"),
            secondary: generate_color_scale("#3B82F6"),
            gray: generate_color_scale("#1F2937"),
            usage_rules: UsageRules {
                primary_use: "CTA buttons, highlights, performance indicators".to_string(),
                secondary_use: "Tech features, links, interactive elements".to_string(),
                surface_bg: "black/gray-900 for premium dark theme".to_string(),
                border: "gray-800 for subtle divisions".to_string(),
                text_strong: "white on dark backgrounds".to_string(),
                text_weak: "gray-400 for secondary info".to_string(),
            },
            accessibility_notes: strings(&[
                "다크 테마 기본, 충분한 명도 대비 필수",
                "스펙 정보는 표 형식으로 구조화",
                "360도 뷰는 키보드 네비게이션 지원",
            ]),
        },

        typography: Typography {
            font_family: FontFamily {
                primary: "Pretendard".to_string(),
                fallback: "system-ui".to_string(),
                alt_suggestion: "Euclid Circular (자동차 브랜드 선호)".to_string(),
            },
            scale: TypeScale {
                h1: TypographyScale::new("72px", 800, "1.0", "-0.03em"),
                h2: TypographyScale::new("48px", 700, "1.1", "-0.02em"),
                h3: TypographyScale::new("32px", 600, "1.2", "-0.01em"),
                body: TypographyScale::new("16px", 400, "1.6", "0"),
                caption: TypographyScale::new("14px", 500, "1.5", "0.05em"),
            },
        },

        components: Components {
            button: ButtonSet {
                primary: PrimaryButton {
                    height_px: 56,
                    padding: "px-10 py-4".to_string(),
                    radius: "rounded-md".to_string(),
                    bg: "bg-primary-600".to_string(),
                    text: "text-white font-bold text-base uppercase tracking-widest".to_string(),
                    hover: "hover:bg-primary-700 hover:scale-105 transition-all duration-200".to_string(),
                    disabled: "disabled:bg-gray-700".to_string(),
                    tailwind: "bg-primary-600 text-white font-bold text-base uppercase tracking-widest px-10 py-4 rounded-md hover:bg-primary-700 hover:scale-105 transition-all".to_string(),
                },
                secondary: SecondaryButton {
                    height_px: 56,
                    padding: "px-10 py-4".to_string(),
                    radius: "rounded-md".to_string(),
                    border: "border-2 border-white".to_string(),
                    bg: None,
                    text: "text-white font-bold text-base uppercase tracking-widest".to_string(),
                    hover: "hover:bg-white hover:text-black transition-all duration-200".to_string(),
                    disabled: "disabled:border-gray-700 disabled:text-gray-700".to_string(),
                    tailwind: "border-2 border-white text-white font-bold text-base uppercase tracking-widest px-10 py-4 rounded-md hover:bg-white hover:text-black transition-all".to_string(),
                },
            },
            input: Input {
                height_px: 52,
                radius: "rounded-md".to_string(),
                border: "border-2 border-gray-700".to_string(),
                placeholder: "placeholder:text-gray-500".to_string(),
                focus_ring: "focus:ring-2 focus:ring-primary-500 focus:border-primary-500 bg-gray-900".to_string(),
                tailwind: "w-full h-13 px-5 bg-gray-900 text-white border-2 border-gray-700 rounded-md focus:ring-2 focus:ring-primary-500".to_string(),
            },
            card: Card {
                radius: "rounded-lg".to_string(),
                padding: "p-0".to_string(),
                shadow: "shadow-2xl hover:shadow-primary-500/20 transition-all duration-300".to_string(),
                border: "border border-gray-800".to_string(),
                tailwind: "bg-gray-900 rounded-lg overflow-hidden border border-gray-800 shadow-2xl hover:shadow-primary-500/20 transition-all".to_string(),
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
                aspect_ratio: None,
            },
            class_snippets: ClassSnippets {
                container: "max-w-[1920px] mx-auto px-8 lg:px-12".to_string(),
                header: "bg-gray-900 text-white border-b border-gray-800 sticky top-0 z-50 h-18 flex items-center justify-between px-8".to_string(),
                hero: "relative h-screen bg-gradient-to-b from-gray-900 to-black flex items-center justify-center".to_string(),
                primary_button: "bg-primary-600 text-white font-bold text-base uppercase tracking-widest px-10 py-4 rounded-md hover:bg-primary-700 hover:scale-105 transition-all".to_string(),
                secondary_button: "border-2 border-white text-white font-bold text-base uppercase tracking-widest px-10 py-4 rounded-md hover:bg-white hover:text-black transition-all".to_string(),
                card: "bg-gray-900 rounded-lg overflow-hidden border border-gray-800 shadow-2xl hover:shadow-primary-500/20 transition-all".to_string(),
                input: "w-full h-13 px-5 bg-gray-900 text-white border-2 border-gray-700 rounded-md focus:ring-2 focus:ring-primary-500".to_string(),
                thumbnail: None,
                poster: None,
            },
            implementation_notes: strings(&[
                "3D 차량 뷰어는 Three.js 또는 WebGL",
                "Configurator는 실시간 가격 계산",
                "비교 도구는 side-by-side table",
                "고해상도 차량 이미지 lazy loading",
            ]),
        },

        variation_summary: VariationSummary {
            changed_points: vec![
                VariationPoint::new(
                    "Colors",
                    "다크 테마 + 레드 액센트",
                    "자동차는 파워와 성능 강조. 다크 배경에 차량이 돋보임",
                ),
                VariationPoint::new(
                    "Typography",
                    "매우 큰 헤딩 (72px) + 넓은 tracking",
                    "임팩트와 프리미엄. 자동차 광고의 정석",
                ),
                VariationPoint::new(
                    "Components",
                    "Sharp corners (rounded-md)",
                    "정밀함과 기술력 표현. 덜 둥근 디자인",
                ),
                VariationPoint::new(
                    "Layout",
                    "360도 뷰 + Configurator",
                    "자동차는 시각적 경험이 핵심. 인터랙티브 탐색",
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

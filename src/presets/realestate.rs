//! 부동산 (real estate) preset.

use crate::color::generate_color_scale;
use crate::spec::*;

pub fn realestate_preset(tone: BrandTone) -> DesignSystemSpec {
    DesignSystemSpec {
        meta: Meta {
            industry: "부동산".to_string(),
            brand_tone: tone.as_str().to_string(),
            style_keywords: strings(&["신뢰", "프리미엄", "안정", "투자가치", "전문성"]),
            target_feeling: "믿을 수 있는 부동산 정보와 전문적인 중개 서비스".to_string(),
        },

        figma_guide: FigmaGuide {
            pages: strings(&[
                "🎨 Design System",
                "🏠 Property Cards",
                "🔍 Search & Filter",
                "📱 Mobile View",
                "📊 Agent Profile",
            ]),
            naming_rule: "Component/Type/State (예: PropertyCard/Luxury/Featured)".to_string(),
            auto_layout_rules: AutoLayoutRules {
                grid: "12-column grid, 24px gutter".to_string(),
                spacing_scale: vec![8, 16, 24, 32, 40, 48, 64, 80, 96],
                radius_scale: vec![8, 12, 16, 20, 24],
                type_scale_tokens: strings(&[
                    "text-sm", "text-base", "text-lg", "text-xl", "text-2xl", "text-3xl",
                    "text-4xl", "text-5xl",
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
                height_px: 76,
                structure: strings(&["Logo", "Buy", "Rent", "Sell", "Agents", "Contact CTA"]),
                sticky_behavior: "sticky with elevated shadow".to_string(),
                desktop: HeaderDesktop {
                    padding_x: "px-8 lg:px-16".to_string(),
                    max_width: "max-w-[1600px]".to_string(),
                    nav_items: 6,
                },
                mobile: HeaderMobile {
                    pattern: "Collapsible menu with search focus".to_string(),
                    height_px: 68,
                },
                tailwind_example: "bg-white shadow-lg sticky top-0 z-50 h-19 flex items-center justify-between px-8".to_string(),
            },

            hero: LayoutHero {
                structure: strings(&[
                    "Headline",
                    "Property Search",
                    "Quick Filters",
                    "Featured Properties",
                ]),
                desktop_grid: "Full-width search with filters".to_string(),
                mobile_stack: "search first, filters collapsible".to_string(),
                padding: "py-20 md:py-32".to_string(),
                background: "Luxury property photography".to_string(),
                image_style: "High-end real estate photography".to_string(),
                tailwind_example: "relative bg-cover bg-center py-20 md:py-32 px-8".to_string(),
            },

            footer: LayoutFooter {
                structure: strings(&["Company Info", "Services", "Locations", "Legal"]),
                legal_items: strings(&["이용약관", "개인정보처리방침", "중개업법 준수사항", "공인중개사정보"]),
                tailwind_example: "bg-gray-900 text-gray-300 py-16 px-8 mt-24".to_string(),
            },

            sections: vec![
                Section::new(
                    "Featured Properties",
                    "추천 매물 강조",
                    "Large cards with high-quality images",
                    "py-20 px-8 grid md:grid-cols-2 lg:grid-cols-3 gap-8",
                ),
                Section::new(
                    "Search by Location",
                    "지역별 매물 탐색",
                    "Map integration or location grid",
                    "py-20 px-8 space-y-8",
                ),
                Section::new(
                    "Agent Profiles",
                    "전문 중개인 소개",
                    "Profile cards with credentials",
                    "bg-gray-50 py-20 px-8 grid md:grid-cols-4 gap-6",
                ),
                Section::new(
                    "Market Insights",
                    "시장 동향 정보 제공",
                    "Chart + article cards",
                    "py-20 px-8 space-y-12",
                ),
                Section::new(
                    "Consultation CTA",
                    "상담 신청 유도",
                    "Form with agent assignment",
                    "bg-primary-600 text-white py-20 px-8 text-center",
                ),
            ],
        },

        colors: Colors {
            primary: generate_color_scale("#0891B2"),
            secondary: generate_color_scale("#059669"),
            gray: generate_color_scale("#64748B"),
            usage_rules: UsageRules {
                primary_use: "주요 CTA, 가격 강조, 중요 정보".to_string(),
                secondary_use: "성공 메시지, 인증 배지".to_string(),
                surface_bg: "white for property cards, gray-50 for sections".to_string(),
                border: "gray-300 for clear division".to_string(),
                text_strong: "gray-900 for property details".to_string(),
                text_weak: "gray-600 for specifications".to_string(),
            },
            accessibility_notes: strings(&[
                "가격은 최소 20px bold로 명확히 표시",
                "매물 상태는 색상+텍스트 병행",
                "지도 마커는 충분한 크기와 대비",
            ]),
        },

        typography: Typography {
            font_family: FontFamily {
                primary: "Pretendard".to_string(),
                fallback: "system-ui".to_string(),
                alt_suggestion: "Playfair Display (고급스러운 헤드라인용)".to_string(),
            },
            scale: TypeScale {
                h1: TypographyScale::new("52px", 700, "1.2", "-0.02em"),
                h2: TypographyScale::new("40px", 600, "1.3", "-0.01em"),
                h3: TypographyScale::new("28px", 600, "1.4", "0"),
                body: TypographyScale::new("17px", 400, "1.6", "0"),
                caption: TypographyScale::new("15px", 400, "1.5", "0"),
            },
        },

        components: Components {
            button: ButtonSet {
                primary: PrimaryButton {
                    height_px: 52,
                    padding: "px-8 py-3.5".to_string(),
                    radius: "rounded-lg".to_string(),
                    bg: "bg-primary-600".to_string(),
                    text: "text-white font-semibold text-lg".to_string(),
                    hover: "hover:bg-primary-700 transition-colors duration-200".to_string(),
                    disabled: "disabled:bg-gray-300".to_string(),
                    tailwind: "bg-primary-600 text-white font-semibold text-lg px-8 py-3.5 rounded-lg hover:bg-primary-700 transition-colors".to_string(),
                },
                secondary: SecondaryButton {
                    height_px: 52,
                    padding: "px-8 py-3.5".to_string(),
                    radius: "rounded-lg".to_string(),
                    border: "border-2 border-primary-600".to_string(),
                    bg: None,
                    text: "text-primary-600 font-semibold text-lg".to_string(),
                    hover: "hover:bg-primary-50 transition-colors duration-200".to_string(),
                    disabled: "disabled:border-gray-300 disabled:text-gray-300".to_string(),
                    tailwind: "border-2 border-primary-600 text-primary-600 font-semibold text-lg px-8 py-3.5 rounded-lg hover:bg-primary-50".to_string(),
                },
            },
            input: Input {
                height_px: 52,
                radius: "rounded-lg".to_string(),
                border: "border-2 border-gray-300".to_string(),
                placeholder: "placeholder:text-gray-500".to_string(),
                focus_ring: "focus:ring-2 focus:ring-primary-500 focus:border-primary-500".to_string(),
                tailwind: "w-full h-13 px-4 text-base border-2 border-gray-300 rounded-lg focus:ring-2 focus:ring-primary-500".to_string(),
            },
            card: Card {
                radius: "rounded-2xl".to_string(),
                padding: "p-0".to_string(),
                shadow: "shadow-lg hover:shadow-2xl transition-all duration-300".to_string(),
                border: "border border-gray-200".to_string(),
                tailwind: "bg-white rounded-2xl overflow-hidden border border-gray-200 shadow-lg hover:shadow-2xl transition-all".to_string(),
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
                container: "max-w-[1600px] mx-auto px-8 lg:px-16".to_string(),
                header: "bg-white shadow-lg sticky top-0 z-50 h-19 flex items-center justify-between px-8".to_string(),
                hero: "relative bg-cover bg-center py-20 md:py-32 px-8".to_string(),
                primary_button: "bg-primary-600 text-white font-semibold text-lg px-8 py-3.5 rounded-lg hover:bg-primary-700 transition-colors".to_string(),
                secondary_button: "border-2 border-primary-600 text-primary-600 font-semibold text-lg px-8 py-3.5 rounded-lg hover:bg-primary-50".to_string(),
                card: "bg-white rounded-2xl overflow-hidden border border-gray-200 shadow-lg hover:shadow-2xl transition-all".to_string(),
                input: "w-full h-13 px-4 text-base border-2 border-gray-300 rounded-lg focus:ring-2 focus:ring-primary-500".to_string(),
                thumbnail: None,
                poster: None,
            },
            implementation_notes: strings(&[
                "고해상도 부동산 사진 최적화 필수",
                "Google Maps API 연동",
                "가격 필터는 range slider로 UX 개선",
                "매물 비교 기능은 side-by-side 레이아웃",
            ]),
        },

        variation_summary: VariationSummary {
            changed_points: vec![
                VariationPoint::new(
                    "Colors",
                    "primary가 청록색(#0891B2)",
                    "부동산은 신뢰와 안정을 주는 청록색. 고급스러우면서 전문적",
                ),
                VariationPoint::new(
                    "Typography",
                    "전반적으로 큰 폰트(h1 52px, body 17px)",
                    "프리미엄 브랜드 이미지. 가격과 정보가 명확히 보여야 함",
                ),
                VariationPoint::new(
                    "Components",
                    "높은 그림자 효과(shadow-lg)",
                    "고급스러운 느낌. 카드가 떠있는 듯한 depth",
                ),
                VariationPoint::new(
                    "Layout",
                    "넉넉한 spacing (32-64px)",
                    "프리미엄 느낌은 여백에서 나옴. 답답하지 않은 레이아웃",
                ),
            ],
            unchanged_principles: strings(&[
                "반응형 12-column grid",
                "Mobile-first 접근",
                "WCAG 접근성 기준",
                "일관된 spacing scale",
            ]),
        },
    }
}

use super::BadgeView;
use super::palette;

pub(super) fn render(view: &BadgeView) -> String {
    let [color1, color2, color3] = palette::gradient(view.division);
    // Initial of the division followed by the sub-rank, e.g. "G3"
    let initial = view.tier_title.chars().next().unwrap_or('?');
    let tier_rank = &view.tier_rank;

    format!(
        r#"<!DOCTYPE svg PUBLIC
    "-//W3C//DTD SVG 1.1//EN"
    "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg height="20" width="110"
    version="1.1"
    xmlns="http://www.w3.org/2000/svg"
    xmlns:xlink="http://www.w3.org/1999/xlink"
    xml:space="preserve">
    <style type="text/css">
        <![CDATA[
            @import url('https://fonts.googleapis.com/css2?family=Noto+Sans+KR:wght@300;400;500;700&display=block');
            .background {{ fill: url(#grad1); }}
            text {{
                fill: white;
                font-family: 'Noto Sans KR', sans-serif;
                font-size: 0.7em;
            }}
            .gray-area {{ fill: #555555; }}
            .tier {{ font-weight: 700; font-size: 0.78em; }}
        ]]>
    </style>
    <defs>
        <linearGradient id="grad1" x1="0%" y1="0%" x2="100%" y2="35%">
            <stop offset="10%" style="stop-color:{color1};stop-opacity:1" />
            <stop offset="55%" style="stop-color:{color2};stop-opacity:1" />
            <stop offset="100%" style="stop-color:{color3};stop-opacity:1" />
        </linearGradient>
        <clipPath id="round-corner">
            <rect x="0" y="0" width="110" height="20" rx="3" ry="3"/>
        </clipPath>
    </defs>
    <rect width="40" height="20" x="70" y="0" rx="3" ry="3" class="background"/>
    <rect width="75" height="20" clip-path="url(#round-corner)" class="gray-area"/>
    <text text-anchor="middle" alignment-baseline="middle" dominant-baseline="middle" transform="translate(37.5, 11)">solved.ac</text>
    <text class="tier" text-anchor="middle" alignment-baseline="middle" dominant-baseline="middle" transform="translate(92, 11)">{initial}{tier_rank}</text>
</svg>
"#
    )
}

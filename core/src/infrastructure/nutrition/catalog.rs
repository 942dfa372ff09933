use crate::domain::nutrition::entities::NutritionRecord;

/// Built-in nutrition values per 100g, keyed by normalized Food-101 label.
pub const BUILTIN_NUTRITION: &[(&str, NutritionRecord)] = &[
    // classics
    ("pizza", NutritionRecord::new(266.0, 11.0, 10.0, 33.0, 4.0)),
    ("hamburger", NutritionRecord::new(250.0, 13.0, 9.0, 30.0, 5.0)),
    ("french_fries", NutritionRecord::new(312.0, 3.0, 15.0, 41.0, 0.0)),
    ("hot_dog", NutritionRecord::new(290.0, 10.0, 18.0, 23.0, 4.0)),
    ("fried_rice", NutritionRecord::new(163.0, 3.0, 5.0, 26.0, 1.0)),
    ("steak", NutritionRecord::new(271.0, 25.0, 19.0, 0.0, 0.0)),
    ("donuts", NutritionRecord::new(452.0, 5.0, 25.0, 51.0, 21.0)),
    ("ramen", NutritionRecord::new(188.0, 5.0, 7.0, 27.0, 1.0)),
    ("spaghetti_bolognese", NutritionRecord::new(160.0, 7.0, 6.0, 20.0, 5.0)),
    ("sushi", NutritionRecord::new(145.0, 7.0, 4.0, 24.0, 2.0)),
    ("tacos", NutritionRecord::new(226.0, 10.0, 12.0, 20.0, 2.0)),
    ("apple_pie", NutritionRecord::new(237.0, 2.0, 11.0, 34.0, 19.0)),
    ("waffles", NutritionRecord::new(291.0, 6.0, 14.0, 35.0, 10.0)),
    ("chocolate_cake", NutritionRecord::new(389.0, 6.0, 17.0, 56.0, 37.0)),
    ("caesar_salad", NutritionRecord::new(190.0, 7.0, 13.0, 11.0, 2.0)),
    ("ice_cream", NutritionRecord::new(207.0, 3.0, 11.0, 24.0, 21.0)),
    ("pancakes", NutritionRecord::new(227.0, 6.0, 6.0, 37.0, 9.0)),
    ("grilled_cheese_sandwich", NutritionRecord::new(320.0, 12.0, 18.0, 28.0, 4.0)),
    // desserts & baked goods
    ("tiramisu", NutritionRecord::new(240.0, 4.0, 13.0, 27.0, 20.0)),
    ("cheesecake", NutritionRecord::new(321.0, 6.0, 23.0, 25.0, 19.0)),
    ("carrot_cake", NutritionRecord::new(350.0, 4.0, 16.0, 50.0, 32.0)),
    ("red_velvet_cake", NutritionRecord::new(378.0, 4.0, 18.0, 52.0, 38.0)),
    ("chocolate_mousse", NutritionRecord::new(189.0, 3.0, 13.0, 16.0, 13.0)),
    ("bread_pudding", NutritionRecord::new(195.0, 5.0, 8.0, 26.0, 15.0)),
    ("creme_brulee", NutritionRecord::new(233.0, 4.0, 16.0, 18.0, 17.0)),
    ("panna_cotta", NutritionRecord::new(201.0, 3.0, 14.0, 16.0, 15.0)),
    ("cannoli", NutritionRecord::new(300.0, 6.0, 17.0, 32.0, 18.0)),
    ("baklava", NutritionRecord::new(334.0, 5.0, 16.0, 43.0, 25.0)),
    ("churros", NutritionRecord::new(380.0, 5.0, 18.0, 50.0, 22.0)),
    ("beignets", NutritionRecord::new(350.0, 6.0, 16.0, 47.0, 18.0)),
    ("macarons", NutritionRecord::new(400.0, 6.0, 20.0, 50.0, 45.0)),
    ("cup_cakes", NutritionRecord::new(305.0, 3.0, 13.0, 45.0, 32.0)),
    ("strawberry_shortcake", NutritionRecord::new(225.0, 3.0, 10.0, 32.0, 20.0)),
    // pasta & italian
    ("spaghetti_carbonara", NutritionRecord::new(175.0, 8.0, 8.0, 18.0, 1.0)),
    ("lasagna", NutritionRecord::new(135.0, 8.0, 5.0, 14.0, 3.0)),
    ("ravioli", NutritionRecord::new(170.0, 7.0, 6.0, 23.0, 2.0)),
    ("gnocchi", NutritionRecord::new(130.0, 3.0, 1.0, 27.0, 1.0)),
    ("risotto", NutritionRecord::new(140.0, 3.0, 5.0, 21.0, 1.0)),
    // asian foods
    ("pad_thai", NutritionRecord::new(140.0, 5.0, 5.0, 19.0, 4.0)),
    ("pho", NutritionRecord::new(92.0, 6.0, 2.0, 13.0, 2.0)),
    ("dumplings", NutritionRecord::new(186.0, 8.0, 6.0, 25.0, 2.0)),
    ("gyoza", NutritionRecord::new(200.0, 9.0, 8.0, 23.0, 2.0)),
    ("spring_rolls", NutritionRecord::new(150.0, 4.0, 5.0, 23.0, 3.0)),
    ("samosa", NutritionRecord::new(262.0, 5.0, 13.0, 32.0, 2.0)),
    ("bibimbap", NutritionRecord::new(121.0, 5.0, 3.0, 20.0, 3.0)),
    ("takoyaki", NutritionRecord::new(155.0, 6.0, 7.0, 18.0, 2.0)),
    ("peking_duck", NutritionRecord::new(337.0, 19.0, 28.0, 0.0, 0.0)),
    ("edamame", NutritionRecord::new(121.0, 11.0, 5.0, 10.0, 2.0)),
    // mexican
    ("nachos", NutritionRecord::new(312.0, 7.0, 18.0, 31.0, 2.0)),
    ("chicken_quesadilla", NutritionRecord::new(210.0, 11.0, 10.0, 19.0, 2.0)),
    ("breakfast_burrito", NutritionRecord::new(195.0, 9.0, 8.0, 22.0, 2.0)),
    ("huevos_rancheros", NutritionRecord::new(150.0, 9.0, 8.0, 11.0, 3.0)),
    // sandwiches & breads
    ("club_sandwich", NutritionRecord::new(240.0, 15.0, 11.0, 21.0, 3.0)),
    ("pulled_pork_sandwich", NutritionRecord::new(280.0, 18.0, 14.0, 20.0, 4.0)),
    ("lobster_roll_sandwich", NutritionRecord::new(320.0, 17.0, 18.0, 23.0, 3.0)),
    ("french_toast", NutritionRecord::new(216.0, 7.0, 8.0, 29.0, 10.0)),
    ("garlic_bread", NutritionRecord::new(350.0, 8.0, 16.0, 44.0, 3.0)),
    ("bruschetta", NutritionRecord::new(150.0, 4.0, 6.0, 21.0, 2.0)),
    // salads
    ("greek_salad", NutritionRecord::new(106.0, 3.0, 8.0, 7.0, 4.0)),
    ("caprese_salad", NutritionRecord::new(160.0, 8.0, 12.0, 4.0, 3.0)),
    ("beet_salad", NutritionRecord::new(88.0, 2.0, 5.0, 10.0, 7.0)),
    ("seaweed_salad", NutritionRecord::new(70.0, 2.0, 4.0, 8.0, 4.0)),
    // breakfast
    ("omelette", NutritionRecord::new(154.0, 11.0, 12.0, 1.0, 1.0)),
    ("eggs_benedict", NutritionRecord::new(215.0, 12.0, 14.0, 11.0, 2.0)),
    ("deviled_eggs", NutritionRecord::new(147.0, 6.0, 13.0, 1.0, 0.0)),
    // meats & seafood
    ("chicken_wings", NutritionRecord::new(203.0, 18.0, 14.0, 0.0, 0.0)),
    ("chicken_curry", NutritionRecord::new(104.0, 8.0, 5.0, 7.0, 3.0)),
    ("baby_back_ribs", NutritionRecord::new(290.0, 22.0, 22.0, 0.0, 0.0)),
    ("beef_carpaccio", NutritionRecord::new(120.0, 21.0, 3.0, 1.0, 0.0)),
    ("beef_tartare", NutritionRecord::new(140.0, 20.0, 6.0, 1.0, 0.0)),
    ("filet_mignon", NutritionRecord::new(227.0, 24.0, 14.0, 0.0, 0.0)),
    ("pork_chop", NutritionRecord::new(231.0, 23.0, 15.0, 0.0, 0.0)),
    ("prime_rib", NutritionRecord::new(310.0, 25.0, 23.0, 0.0, 0.0)),
    ("grilled_salmon", NutritionRecord::new(139.0, 23.0, 5.0, 0.0, 0.0)),
    ("fish_and_chips", NutritionRecord::new(265.0, 13.0, 14.0, 23.0, 1.0)),
    ("fried_calamari", NutritionRecord::new(175.0, 15.0, 8.0, 10.0, 0.0)),
    ("crab_cakes", NutritionRecord::new(210.0, 12.0, 13.0, 12.0, 1.0)),
    ("sashimi", NutritionRecord::new(127.0, 20.0, 5.0, 0.0, 0.0)),
    ("scallops", NutritionRecord::new(69.0, 12.0, 1.0, 3.0, 0.0)),
    ("mussels", NutritionRecord::new(86.0, 12.0, 2.0, 4.0, 0.0)),
    ("oysters", NutritionRecord::new(68.0, 7.0, 2.0, 4.0, 0.0)),
    ("tuna_tartare", NutritionRecord::new(132.0, 23.0, 4.0, 0.0, 0.0)),
    ("ceviche", NutritionRecord::new(89.0, 13.0, 2.0, 5.0, 2.0)),
    ("escargots", NutritionRecord::new(90.0, 16.0, 1.0, 2.0, 0.0)),
    ("foie_gras", NutritionRecord::new(462.0, 12.0, 44.0, 2.0, 0.0)),
    // soups
    ("french_onion_soup", NutritionRecord::new(57.0, 2.0, 2.0, 8.0, 4.0)),
    ("clam_chowder", NutritionRecord::new(103.0, 4.0, 5.0, 11.0, 2.0)),
    ("miso_soup", NutritionRecord::new(40.0, 2.0, 1.0, 5.0, 1.0)),
    ("hot_and_sour_soup", NutritionRecord::new(45.0, 3.0, 2.0, 5.0, 1.0)),
    ("lobster_bisque", NutritionRecord::new(95.0, 4.0, 6.0, 7.0, 2.0)),
    // sides & appetizers
    ("onion_rings", NutritionRecord::new(411.0, 5.0, 24.0, 44.0, 4.0)),
    ("macaroni_and_cheese", NutritionRecord::new(164.0, 6.0, 8.0, 18.0, 2.0)),
    ("poutine", NutritionRecord::new(510.0, 13.0, 27.0, 54.0, 2.0)),
    ("falafel", NutritionRecord::new(333.0, 13.0, 18.0, 32.0, 2.0)),
    ("hummus", NutritionRecord::new(166.0, 8.0, 10.0, 14.0, 0.0)),
    ("guacamole", NutritionRecord::new(160.0, 2.0, 15.0, 9.0, 1.0)),
    ("cheese_plate", NutritionRecord::new(350.0, 22.0, 28.0, 2.0, 1.0)),
    // complex dishes
    ("paella", NutritionRecord::new(175.0, 9.0, 5.0, 23.0, 2.0)),
    ("shrimp_and_grits", NutritionRecord::new(180.0, 11.0, 8.0, 16.0, 1.0)),
    ("croque_madame", NutritionRecord::new(295.0, 15.0, 16.0, 23.0, 3.0)),
    // frozen desserts
    ("frozen_yogurt", NutritionRecord::new(127.0, 4.0, 4.0, 20.0, 17.0)),
];

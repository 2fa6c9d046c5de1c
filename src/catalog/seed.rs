//! Builtin nutrition table
//!
//! Carbohydrate grams per 100 g/ml for the foods shipped with the catalog.

use crate::models::FoodCategory::{self, *};

/// (name, carbs per 100 g/ml, category)
pub const BUILTIN_FOODS: &[(&str, f64, FoodCategory)] = &[
    // MixedDishes
    ("Bacalhau à brás", 8.3, MixedDishes),
    ("Bacalhau com natas", 9.2, MixedDishes),
    ("Douradinhos", 17.5, MixedDishes),
    ("Empadão de atum", 10.7, MixedDishes),
    ("Feijoada c/ carne porco", 13.3, MixedDishes),
    ("Panados", 8.5, MixedDishes),
    ("Rancho", 6.5, MixedDishes),
    ("Lasanha bolonhesa", 9.2, MixedDishes),
    ("Pizza", 29.9, MixedDishes),
    ("Quiche lorraine c/ leite", 23.5, MixedDishes),
    ("Açorda de marisco", 5.4, MixedDishes),
    ("Arroz cabidela", 12.2, MixedDishes),
    ("Arroz frango", 25.2, MixedDishes),
    ("Arroz marisco", 8.3, MixedDishes),
    ("Arroz pato", 11.0, MixedDishes),
    ("Arroz peixe", 15.5, MixedDishes),
    ("Arroz polvo", 10.9, MixedDishes),
    ("Arroz valenciana", 7.7, MixedDishes),
    ("Bacalhau gomes de sá", 13.1, MixedDishes),
    ("Caldeirada de Bacalhau", 7.1, MixedDishes),
    ("Carne estufada c/ ervilhas e bat", 5.4, MixedDishes),
    ("Empadão de carne (puré)", 10.7, MixedDishes),
    ("Massada de peixe", 14.0, MixedDishes),
    ("Salada de bacalhau com grão", 7.6, MixedDishes),
    ("Salada russa", 5.6, MixedDishes),
    ("Quiche vegetais", 12.9, MixedDishes),

    // Pastries
    ("Bolo de arroz", 62.7, Pastries),
    ("Bolo de Berlim s/ creme", 43.7, Pastries),
    ("Bolo de Berlim c/ creme", 68.9, Pastries),
    ("Bolo de bolacha", 46.3, Pastries),
    ("Bolo de chocolate", 47.0, Pastries),
    ("Croissant simples", 42.2, Pastries),
    ("Pão de leite", 51.4, Pastries),
    ("Pão de ló", 62.2, Pastries),
    ("Pastel de feijão", 52.0, Pastries),
    ("Pastel de nata", 48.5, Pastries),
    ("Queijada de requeijão", 40.8, Pastries),
    ("Brioche", 53.8, Pastries),
    ("Pão de deus", 42.0, Pastries),
    ("Salame", 53.6, Pastries),
    ("Palmiers", 57.0, Pastries),
    ("Bolo Rei", 57.4, Pastries),
    ("Tarte de maçã", 29.3, Pastries),
    ("Pipocas doces (médias)", 64.0, Pastries),
    ("Pipocas salgadas (médias)", 51.4, Pastries),

    // Desserts
    ("Arroz doce", 45.2, Desserts),
    ("Gelado leite/nata", 53.1, Desserts),
    ("Gelatina", 15.4, Desserts),
    ("Leite creme", 19.5, Desserts),
    ("Mousse chocolate", 31.0, Desserts),
    ("Pudim de ovos e leite", 44.8, Desserts),
    ("Rabanadas", 31.3, Desserts),
    ("Sonhos", 29.2, Desserts),
    ("Açúcar", 99.3, Desserts),
    ("Mel", 78.0, Desserts),

    // SavouryCharcuterie
    ("Batata frita caseira palitos", 27.6, SavouryCharcuterie),
    ("Chamuça", 39.3, SavouryCharcuterie),
    ("Croquete", 23.1, SavouryCharcuterie),
    ("Empada de frango", 33.9, SavouryCharcuterie),
    ("Rissol", 28.0, SavouryCharcuterie),
    ("Pastel de bacalhau", 12.3, SavouryCharcuterie),
    ("Pastel folhado carne", 37.4, SavouryCharcuterie),
    ("Alheira/Farinheira crua (média)", 27.0, SavouryCharcuterie),
    ("Pão com chouriço", 45.6, SavouryCharcuterie),

    // Breads
    ("Pão de trigo branco", 57.3, Breads),
    ("Pão trigo integral", 39.9, Breads),
    ("Pão trigo integral c/ sementes", 43.2, Breads),
    ("Pão de centeio", 56.4, Breads),
    ("Pão centeio integral", 41.3, Breads),
    ("Pão mistura", 53.8, Breads),
    ("Pão milho", 37.2, Breads),
    ("Wrap simples", 53.0, Breads),

    // CerealsBiscuits
    ("Biscoito caseiro simples", 75.0, CerealsBiscuits),
    ("Croutons", 74.0, CerealsBiscuits),
    ("Flocos de aveia", 61.7, CerealsBiscuits),
    ("Muesli", 69.1, CerealsBiscuits),
    ("Granola/Granola sem açúcar", 72.3, CerealsBiscuits),
    ("Tapioca", 87.5, CerealsBiscuits),
    ("Tosta de trigo", 69.7, CerealsBiscuits),
    ("Gresinho", 67.0, CerealsBiscuits),

    // DairyBeverages
    ("Leite de vaca", 4.9, DairyBeverages),
    ("Iogurte natural ou 0% açúcar", 5.0, DairyBeverages),
    ("Iogurte líquido 0%açúcar", 4.4, DairyBeverages),
    ("Bebida amêndoa", 5.3, DairyBeverages),
    ("Bebida arroz", 11.8, DairyBeverages),
    ("Bebida aveia", 8.2, DairyBeverages),
    ("Bebida soja natural 0%açúcar", 0.4, DairyBeverages),

    // Soups
    ("Sopa de legumes (média)", 4.5, Soups),
    ("Caldo verde", 5.3, Soups),
    ("Sopa de grão/feijão (média)", 6.0, Soups),
    ("Creme de ervilhas/favas (média)", 6.0, Soups),
    ("Canja de galinha c/ arroz", 5.8, Soups),
    ("Sopa de peixe c/ massa", 5.8, Soups),
    ("Canja c/ massa", 2.9, Soups),

    // Rice
    ("Arroz integral cozido", 33.3, Rice),
    ("Arroz \"solto\" cozido", 28.0, Rice),
    ("Arroz de cenoura", 20.0, Rice),
    ("Arroz ervilhas", 18.0, Rice),
    ("Arroz de feijão", 20.8, Rice),
    ("Arroz malandrinho", 16.8, Rice),
    ("Arroz agulha cru", 78.0, Rice),
    ("Arroz integral cru", 71.6, Rice),

    // Pasta
    ("Massa cozida \"al dente\"", 34.3, Pasta),
    ("Massa bem cozida", 19.9, Pasta),
    ("Massa crua", 71.1, Pasta),
    ("Cuscus cozido", 22.2, Pasta),
    ("Bulgur/Couscous cru", 67.5, Pasta),
    ("Quinoa cozida", 26.4, Pasta),
    ("Quinoa/Trigo Sarraceno crus", 62.0, Pasta),
    ("Millet cozido", 23.6, Pasta),
    ("Millet cru", 72.9, Pasta),

    // Potato
    ("Batata cozida", 18.5, Potato),
    ("Batata assada", 24.8, Potato),
    ("Batata doce assada", 28.3, Potato),
    ("Puré batata", 16.8, Potato),
    ("Batata crua", 19.2, Potato),
    ("Batata crua com pele", 16.7, Potato),
    ("Batata doce crua com pele", 21.8, Potato),
    ("Batata frita (cav.)", 24.6, Potato),
    ("Batata frita (congelada)", 29.5, Potato),
    ("Boniato/batata", 19.5, Potato),

    // Legumes
    ("Feijão manteiga cozido", 14.0, Legumes),
    ("Feijão branco cozido", 14.6, Legumes),
    ("Feijão frade cozido", 18.1, Legumes),
    ("Grão de bico cozido", 16.7, Legumes),
    ("Ervilhas congeladas cozidas", 7.5, Legumes),
    ("Ervilhas estufadas", 9.6, Legumes),
    ("Favas cozidas", 7.4, Legumes),
    ("Lentilhas secas cozidas", 16.7, Legumes),
    ("Tremoço cozido", 7.2, Legumes),
    ("Feijão Preto", 13.0, Legumes),

    // Flours
    ("Farinha de trigo integral", 65.2, Flours),
    ("Farinha de trigo", 74.0, Flours),
    ("Farinha tipo tipo 55", 74.3, Flours),
    ("Farinha espelta", 69.8, Flours),
    ("Farinha mandioca", 84.6, Flours),
    ("Farinha de milho", 75.3, Flours),
    ("Farinha alfarroba", 85.6, Flours),
    ("Farinha de amêndoa", 6.9, Flours),
    ("Farinha de aveia", 57.0, Flours),
    ("Amido de milho", 90.2, Flours),

    // FreshFruit
    ("Abacate", 1.6, FreshFruit),
    ("Abricote/Damasco", 8.0, FreshFruit),
    ("Ameixa branca", 7.4, FreshFruit),
    ("Ameixa vermelha", 7.0, FreshFruit),
    ("Ameixa rainha cláudia", 11.2, FreshFruit),
    ("Ananás", 6.5, FreshFruit),
    ("Anona", 10.4, FreshFruit),
    ("Banana", 12.9, FreshFruit),
    ("Carambola", 6.8, FreshFruit),
    ("Cereja", 11.2, FreshFruit),
    ("Clementina", 8.3, FreshFruit),
    ("Diospiro", 12.4, FreshFruit),
    ("Figo", 11.9, FreshFruit),
    ("Framboesa", 4.8, FreshFruit),
    ("Kiwi", 8.8, FreshFruit),
    ("Laranja", 6.1, FreshFruit),
    ("Lichia fresca", 14.8, FreshFruit),
    ("Maçã", 10.2, FreshFruit),
    ("Maçã cozida", 10.5, FreshFruit),
    ("Maçã assada", 15.7, FreshFruit),
    ("Manga", 8.0, FreshFruit),
    ("Marmelo", 7.3, FreshFruit),
    ("Melancia", 2.9, FreshFruit),
    ("Melão", 3.0, FreshFruit),
    ("Meloa", 2.5, FreshFruit),
    ("Mirtilo", 6.4, FreshFruit),
    ("Morango", 5.1, FreshFruit),
    ("Nectarina", 7.7, FreshFruit),
    ("Nêspera", 6.2, FreshFruit),
    ("Papaia", 5.7, FreshFruit),
    ("Pêra cozida", 7.8, FreshFruit),
    ("Pêssego", 6.2, FreshFruit),
    ("Romã", 6.0, FreshFruit),
    ("Tangerina", 6.3, FreshFruit),
    ("Uva branca", 14.9, FreshFruit),
    ("Uva tinta", 15.2, FreshFruit),
    ("Salada de fruta sem calda", 9.2, FreshFruit),

    // FruitInSyrup
    ("Pêssego em calda", 20.6, FruitInSyrup),
    ("Ananás em calda", 23.2, FruitInSyrup),
    ("Cereja em calda", 28.7, FruitInSyrup),
    ("Pêra em calda", 28.9, FruitInSyrup),

    // DehydratedFruit
    ("Cereja desidratada", 72.6, DehydratedFruit),
    ("Framboesa desidratada", 30.9, DehydratedFruit),
    ("Maçã desidratada", 74.5, DehydratedFruit),
    ("Manga desidratada", 68.7, DehydratedFruit),
    ("Papaia desidratada", 73.3, DehydratedFruit),
    ("Pêra desidratada", 59.9, DehydratedFruit),

    // StarchyOilyNuts
    ("Castanha cozida", 35.9, StarchyOilyNuts),
    ("Castanha assada", 45.5, StarchyOilyNuts),
    ("Amêndoa torrada s/ pele", 7.1, StarchyOilyNuts),
    ("Amendoim natural", 10.1, StarchyOilyNuts),
    ("Avelã", 6.0, StarchyOilyNuts),
    ("Noz", 3.6, StarchyOilyNuts),
    ("Pinhão", 5.0, StarchyOilyNuts),
    ("Pistáchio torrado", 12.6, StarchyOilyNuts),
    ("Caju torrado", 19.4, StarchyOilyNuts),

    // DriedFruit
    ("Ameixa", 31.0, DriedFruit),
    ("Figo", 57.2, DriedFruit),
    ("Tâmara", 60.6, DriedFruit),
    ("Tâmara s/ caroço", 67.3, DriedFruit),
    ("Uva passa", 66.3, DriedFruit),

    // Seeds
    ("Abóbora", 13.9, Seeds),
    ("Cânhamo", 2.4, Seeds),
    ("Chia", 7.7, Seeds),
    ("Girassol", 17.0, Seeds),
    ("Linhaça", 18.1, Seeds),
    ("Papoila", 13.7, Seeds),
    ("Sésamo", 6.4, Seeds),

    // Sushi
    ("Uramaki/Rolos california (média)", 25.0, Sushi),
    ("Temaki (média)", 17.5, Sushi),
    ("Maki", 29.0, Sushi),
    ("Nigiri (média)", 30.0, Sushi),
    ("Tempura camarão", 10.4, Sushi),
    ("Tempura de vegetais", 13.8, Sushi),
];
